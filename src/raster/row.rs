use super::RasterError;

/// Bytes needed to hold `width` 1-bit pixels.
pub fn row_stride(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Flip every bit so lit pixels (1) become black (0) in a greyscale PNG.
pub fn invert_polarity(packed: &[u8]) -> Vec<u8> {
    packed.iter().map(|b| !b).collect()
}

/// One horizontal line of packed 1-bit pixels.
///
/// The MSB of byte 0 is the leftmost pixel. A set bit is a lit segment,
/// a clear bit is background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRow {
    width: u32,
    bytes: Vec<u8>,
}

impl PixelRow {
    /// A blank row `width` pixels wide.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            bytes: vec![0; row_stride(width)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Reset every pixel to background.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Copy `data` into the row starting at byte `offset`.
    pub fn place(&mut self, offset: usize, data: &[u8]) -> Result<(), RasterError> {
        let end = offset
            .checked_add(data.len())
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| {
                RasterError::InvalidGeometry(format!(
                    "{} bytes at offset {} overrun a {}-byte row",
                    data.len(),
                    offset,
                    self.bytes.len()
                ))
            })?;
        self.bytes[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Whether pixel `x` is lit. Pixels past the width read as background.
    pub fn is_lit(&self, x: u32) -> bool {
        if x >= self.width {
            return false;
        }
        let byte = self.bytes[(x / 8) as usize];
        (byte >> (7 - x % 8)) & 1 == 1
    }
}
