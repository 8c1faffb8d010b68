//! Digit-level primitives: ID validation, check codes, segment glyphs.

mod checksum;
mod id;
mod segments;

pub use checksum::{ChecksumCode, ChecksumError, compute_checksum};
pub use id::{is_digit_string, validate_id_format};
pub use segments::{GLYPHS, SegmentError, digit_for_glyph, glyph_for, map_digits_to_pattern};
