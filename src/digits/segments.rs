use thiserror::Error;

/// Segment masks for the digits 0..9, indexed by digit value.
///
/// Each byte drives one LCD digit cell; a set bit lights the matching
/// segment. Seven bits select segments, one is unused by the panel. The byte
/// is laid into the pixel row as-is, MSB first.
pub const GLYPHS: [u8; 10] = [
    0b0111_0111, // 0
    0b0100_0010, // 1
    0b1011_0110, // 2
    0b1101_0110, // 3
    0b1100_0011, // 4
    0b1101_0101, // 5
    0b1111_0101, // 6
    0b0100_0110, // 7
    0b1111_0111, // 8
    0b1101_0111, // 9
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("no segment pattern for '{ch}' at position {index}")]
    UnmappableCharacter { ch: char, index: usize },
}

/// Glyph byte for a single digit character.
pub fn glyph_for(ch: char) -> Option<u8> {
    ch.to_digit(10).map(|d| GLYPHS[d as usize])
}

/// Reverse lookup: the digit a glyph byte displays.
pub fn digit_for_glyph(glyph: u8) -> Option<char> {
    GLYPHS
        .iter()
        .position(|g| *g == glyph)
        .and_then(|d| char::from_digit(d as u32, 10))
}

/// Map every digit of `digits` to its glyph byte.
///
/// Any non-digit fails the whole call; no partial output is returned.
pub fn map_digits_to_pattern(digits: &str) -> Result<Vec<u8>, SegmentError> {
    digits
        .chars()
        .enumerate()
        .map(|(index, ch)| glyph_for(ch).ok_or(SegmentError::UnmappableCharacter { ch, index }))
        .collect()
}
