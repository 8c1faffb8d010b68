use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};

use super::RasterError;
use super::row::row_stride;
use super::writer::check_geometry;

const INK: Luma<u8> = Luma([0x00]);
const PAPER: Luma<u8> = Luma([0xFF]);

/// Expand packed 1-bit rows into an 8-bit greyscale image.
///
/// Lit bits become black, background becomes white, the same rendering the
/// 1-bit writer produces through polarity inversion.
pub fn expand_to_luma8(width: u32, height: u32, packed: &[u8]) -> Result<GrayImage, RasterError> {
    check_geometry(width, height, packed)?;
    let stride = row_stride(width);
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let byte = packed[y as usize * stride + (x / 8) as usize];
        if (byte >> (7 - x % 8)) & 1 == 1 {
            INK
        } else {
            PAPER
        }
    }))
}

/// Write packed rows as an 8-bit greyscale PNG, one byte per pixel.
pub fn write_luma8_image(
    path: &Path,
    width: u32,
    height: u32,
    packed: &[u8],
) -> Result<(), RasterError> {
    let img = expand_to_luma8(width, height, packed)?;

    let file = File::create(path).map_err(|source| RasterError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::NoFilter)
        .write_image(img.as_raw(), width, height, ExtendedColorType::L8)
        .map_err(RasterError::Luma8Failed)?;
    out.flush()
        .map_err(|err| RasterError::Luma8Failed(image::ImageError::IoError(err)))
}
