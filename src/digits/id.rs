//! Shape checks for candidate asset IDs.

/// True when every character is an ASCII decimal digit.
///
/// The empty string passes; callers that need at least one digit check the
/// length themselves.
pub fn is_digit_string(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Accept `id` only if it has exactly `expected_len` characters, all digits.
pub fn validate_id_format(id: &str, expected_len: usize) -> bool {
    id.chars().count() == expected_len && is_digit_string(id)
}
