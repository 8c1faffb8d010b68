//! Monochrome PNG output for packed pixel rows.

mod luma;
mod row;
mod writer;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use luma::{expand_to_luma8, write_luma8_image};
pub use row::{PixelRow, invert_polarity, row_stride};
pub use writer::{encode_raster, encode_raster_to, write_raster_image};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid raster geometry: {0}")]
    InvalidGeometry(String),
    #[error("cannot create {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("PNG encoder could not be initialised: {0}")]
    EncoderInitFailed(#[source] png::EncodingError),
    #[error("failed to write PNG rows: {0}")]
    WriteFailed(#[source] png::EncodingError),
    #[error("failed to write 8-bit greyscale PNG: {0}")]
    Luma8Failed(#[source] image::ImageError),
}
