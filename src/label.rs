//! Asset ID → LCD label pipeline.
//!
//! An ID is prefixed with its check code, every digit is turned into a
//! segment glyph, and the glyphs are laid into a single packed pixel row
//! that is written out as `<id>.png`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::digits::{
    ChecksumCode, ChecksumError, SegmentError, compute_checksum, map_digits_to_pattern,
    validate_id_format,
};
use crate::raster::{PixelRow, RasterError, row_stride, write_luma8_image, write_raster_image};

/// Labels are always a single pixel row.
pub const LABEL_HEIGHT: u32 = 1;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("'{id}' is not a {expected}-digit ID")]
    InvalidId { id: String, expected: usize },
    #[error("invalid label layout: {0}")]
    Layout(String),
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error(transparent)]
    Segment(#[from] SegmentError),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Output encoding for label files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputDepth {
    /// 1-bit greyscale, the panel's native format.
    #[default]
    One,
    /// 8-bit greyscale, one byte per pixel.
    Eight,
}

/// Geometry and check-code parameters for one label format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLayout {
    pub id_len: usize,
    pub checksum_modulus: u64,
    pub checksum_len: usize,
    pub width: u32,
    /// Byte offset of the first glyph within the row.
    pub glyph_offset: usize,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            id_len: 4,
            checksum_modulus: 97,
            checksum_len: 2,
            width: 256,
            glyph_offset: 1,
        }
    }
}

impl LabelLayout {
    /// Digits shown on the panel: check code followed by the ID.
    /// `None` when the lengths overflow `usize`.
    pub fn digit_count(&self) -> Option<usize> {
        self.checksum_len.checked_add(self.id_len)
    }

    /// Byte range of the glyphs within the row, `None` on overflow.
    pub fn glyph_span(&self) -> Option<std::ops::Range<usize>> {
        let end = self.glyph_offset.checked_add(self.digit_count()?)?;
        Some(self.glyph_offset..end)
    }

    pub fn row_bytes(&self) -> usize {
        row_stride(self.width)
    }

    /// True when a modulus remainder can be wider than the check code.
    pub fn truncates_checksum(&self) -> bool {
        u32::try_from(self.checksum_len)
            .ok()
            .and_then(|exp| 10u64.checked_pow(exp))
            .is_some_and(|ceiling| self.checksum_modulus > ceiling)
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        if self.id_len == 0 {
            return Err(LabelError::Layout("ID length must be at least 1".into()));
        }
        if self.checksum_modulus == 0 {
            return Err(LabelError::Layout("checksum modulus must be non-zero".into()));
        }
        if self.width == 0 || self.width % 8 != 0 {
            return Err(LabelError::Layout(format!(
                "width must be a positive multiple of 8, got {}",
                self.width
            )));
        }
        let span = self.glyph_span().ok_or_else(|| {
            LabelError::Layout(format!(
                "{} + {} glyphs at offset {} overflow the row index",
                self.checksum_len, self.id_len, self.glyph_offset
            ))
        })?;
        if span.end > self.row_bytes() {
            return Err(LabelError::Layout(format!(
                "{} glyphs at offset {} do not fit a {}-byte row",
                span.len(),
                self.glyph_offset,
                self.row_bytes()
            )));
        }
        Ok(())
    }
}

/// A fully encoded label, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLabel {
    pub id: String,
    pub checksum: ChecksumCode,
    /// Check code followed by the ID, as shown on the panel.
    pub digits: String,
    pub glyphs: Vec<u8>,
    pub row: PixelRow,
}

impl EncodedLabel {
    pub fn file_name(&self) -> String {
        format!("{}.png", self.id)
    }
}

/// Encodes IDs into label rows for a fixed [`LabelLayout`].
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    layout: LabelLayout,
}

impl LabelEncoder {
    pub fn new(layout: LabelLayout) -> Result<Self, LabelError> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    /// Validate `id` and build its label row.
    pub fn encode(&self, id: &str) -> Result<EncodedLabel, LabelError> {
        if !validate_id_format(id, self.layout.id_len) {
            return Err(LabelError::InvalidId {
                id: id.to_string(),
                expected: self.layout.id_len,
            });
        }

        let checksum = compute_checksum(id, self.layout.checksum_modulus, self.layout.checksum_len)?;
        let digits = format!("{checksum}{id}");
        let glyphs = map_digits_to_pattern(&digits)?;

        let mut row = PixelRow::new(self.layout.width);
        row.place(self.layout.glyph_offset, &glyphs)?;

        debug!(id, checksum = %checksum, digits = %digits, "encoded label");
        Ok(EncodedLabel {
            id: id.to_string(),
            checksum,
            digits,
            glyphs,
            row,
        })
    }

    /// Write `label` into `dir` as `<id>.png`, returning the written path.
    pub fn write(
        &self,
        label: &EncodedLabel,
        dir: &Path,
        depth: OutputDepth,
    ) -> Result<PathBuf, LabelError> {
        let path = dir.join(label.file_name());
        let row = label.row.as_bytes();
        match depth {
            OutputDepth::One => write_raster_image(&path, label.row.width(), LABEL_HEIGHT, row)?,
            OutputDepth::Eight => write_luma8_image(&path, label.row.width(), LABEL_HEIGHT, row)?,
        }
        Ok(path)
    }
}
