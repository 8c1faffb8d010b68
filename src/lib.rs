//! Seven-segment LCD label generation for numeric asset IDs.
//!
//! Each 4-digit ID gets a reverse-then-mod check code prefix, the resulting
//! digits are mapped to segment glyph bytes, and the glyphs are packed into a
//! 256x1 monochrome PNG named after the ID.

mod batch;
mod digits;
mod label;
mod raster;

pub use batch::{BatchEntry, BatchProcessor, BatchReport, Outcome, file_digest};
pub use digits::{
    ChecksumCode, ChecksumError, GLYPHS, SegmentError, compute_checksum, digit_for_glyph, glyph_for,
    is_digit_string, map_digits_to_pattern, validate_id_format,
};
pub use label::{EncodedLabel, LABEL_HEIGHT, LabelEncoder, LabelError, LabelLayout, OutputDepth};
pub use raster::{
    PixelRow, RasterError, encode_raster, encode_raster_to, expand_to_luma8, invert_polarity,
    row_stride, write_luma8_image, write_raster_image,
};

use anyhow::Result;

/// Encode a single ID with the default layout and write `<id>.png` into `dir`.
pub fn generate_label(id: &str, dir: &std::path::Path) -> Result<std::path::PathBuf> {
    let encoder = LabelEncoder::default();
    let label = encoder.encode(id)?;
    Ok(encoder.write(&label, dir, OutputDepth::One)?)
}
