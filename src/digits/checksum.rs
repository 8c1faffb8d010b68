use std::fmt;
use thiserror::Error;

use crate::digits::id::is_digit_string;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("checksum input must be a non-empty decimal digit string, got {0:?}")]
    InvalidInput(String),
    #[error("reversed value of {0:?} does not fit in 64 bits")]
    NumericOverflow(String),
    #[error("checksum modulus must be greater than zero")]
    ZeroModulus,
}

/// Fixed-width, zero-padded check code derived from a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChecksumCode(String);

impl ChecksumCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ChecksumCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the reverse-then-mod check code of `input`.
///
/// The digits are read back to front as a base-10 integer, reduced modulo
/// `modulus`, then modulo `10^out_len`, and rendered left-padded with `'0'`
/// to exactly `out_len` characters. A modulus larger than `10^out_len`
/// silently loses its high digits.
///
/// ```
/// use lcdtag::compute_checksum;
///
/// assert_eq!(compute_checksum("1337", 97, 2).unwrap().as_str(), "56");
/// assert_eq!(compute_checksum("99999", 83, 3).unwrap().as_str(), "067");
/// ```
pub fn compute_checksum(
    input: &str,
    modulus: u64,
    out_len: usize,
) -> Result<ChecksumCode, ChecksumError> {
    if input.is_empty() || !is_digit_string(input) {
        return Err(ChecksumError::InvalidInput(input.to_string()));
    }
    if modulus == 0 {
        return Err(ChecksumError::ZeroModulus);
    }

    let reversed = reversed_value(input)?;
    let mut code = reversed % modulus;
    // 10^out_len past u64 means the remainder already fits
    if let Some(ceiling) = u32::try_from(out_len)
        .ok()
        .and_then(|exp| 10u64.checked_pow(exp))
    {
        code %= ceiling;
    }

    if out_len == 0 {
        return Ok(ChecksumCode(String::new()));
    }
    Ok(ChecksumCode(format!("{code:0out_len$}")))
}

/// Interpret `digits` in reverse order as a base-10 `u64`.
fn reversed_value(digits: &str) -> Result<u64, ChecksumError> {
    digits.bytes().rev().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or_else(|| ChecksumError::NumericOverflow(digits.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(input: &str, modulus: u64, out_len: usize) -> String {
        compute_checksum(input, modulus, out_len)
            .unwrap()
            .into_string()
    }

    #[test]
    fn reference_vectors() {
        assert_eq!(code("0000", 97, 2), "00");
        assert_eq!(code("1337", 97, 2), "56");
        assert_eq!(code("9999", 97, 2), "08");
        assert_eq!(code("0001", 97, 2), "30");
        assert_eq!(code("10000", 97, 2), "01");
        assert_eq!(code("99999", 83, 3), "067");
        assert_eq!(code("000001", 101, 3), "010");
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            compute_checksum("a001", 97, 2),
            Err(ChecksumError::InvalidInput("a001".to_string()))
        );
        assert!(compute_checksum("12 4", 97, 2).is_err());
        assert!(compute_checksum("", 97, 2).is_err());
        assert!(compute_checksum("１２", 97, 2).is_err());
    }

    #[test]
    fn zero_modulus_is_an_error() {
        assert_eq!(compute_checksum("1234", 0, 2), Err(ChecksumError::ZeroModulus));
    }

    #[test]
    fn output_is_always_out_len_digits() {
        for n in 0..10_000u32 {
            let id = format!("{n:04}");
            let c = code(&id, 97, 2);
            assert_eq!(c.len(), 2, "id {id}");
            assert!(c.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn truncates_when_modulus_exceeds_width() {
        // 4321 % 1000 = 321, truncated to the last two digits
        assert_eq!(code("1234", 1000, 2), "21");
        assert_eq!(code("1234", 97, 0), "");
        assert_eq!(code("1234", 97, 30).len(), 30);
    }

    #[test]
    fn overflow_is_reported() {
        // 20 nines reversed exceed u64::MAX (~1.8e19)
        let long = "9".repeat(20);
        assert_eq!(
            compute_checksum(&long, 97, 2),
            Err(ChecksumError::NumericOverflow(long.clone()))
        );
        // trailing zeros become leading zeros after reversal and never overflow
        let padded = format!("1{}", "0".repeat(40));
        assert_eq!(code(&padded, 97, 2), "01");
        let max_reversed: String = u64::MAX.to_string().chars().rev().collect();
        assert_eq!(code(&max_reversed, 97, 2).len(), 2);
    }
}
