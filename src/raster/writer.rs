use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use png::{AdaptiveFilterType, BitDepth, ColorType, Compression, Encoder, FilterType};
use tracing::debug;

use super::RasterError;
use super::row::{invert_polarity, row_stride};

/// Write `packed` as a 1-bit greyscale PNG at `path`, replacing any existing file.
///
/// Rows are taken consecutively from `packed`, each `ceil(width / 8)` bytes
/// long. Bits are inverted on the way out so that a set bit renders black.
/// The file handle is released on every return path.
pub fn write_raster_image(
    path: &Path,
    width: u32,
    height: u32,
    packed: &[u8],
) -> Result<(), RasterError> {
    check_geometry(width, height, packed)?;

    let file = File::create(path).map_err(|source| RasterError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    encode_raster_to(&mut out, width, height, packed)?;
    out.flush()
        .map_err(|err| RasterError::WriteFailed(err.into()))?;

    debug!(path = %path.display(), width, height, "wrote 1-bit raster");
    Ok(())
}

/// Encode `packed` into an in-memory PNG byte stream.
pub fn encode_raster(width: u32, height: u32, packed: &[u8]) -> Result<Vec<u8>, RasterError> {
    let mut buf = Vec::new();
    encode_raster_to(&mut buf, width, height, packed)?;
    Ok(buf)
}

/// Stream a 1-bit greyscale PNG into `sink`.
pub fn encode_raster_to<W: Write>(
    sink: W,
    width: u32,
    height: u32,
    packed: &[u8],
) -> Result<(), RasterError> {
    let len = check_geometry(width, height, packed)?;

    let mut encoder = Encoder::new(sink, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::One);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);
    encoder.set_adaptive_filter(AdaptiveFilterType::NonAdaptive);

    let mut writer = encoder
        .write_header()
        .map_err(RasterError::EncoderInitFailed)?;

    // greyscale 1-bit reads 0 as black; our buffer uses 1 for lit
    let rows = invert_polarity(&packed[..len]);
    writer
        .write_image_data(&rows)
        .map_err(RasterError::WriteFailed)?;
    writer.finish().map_err(RasterError::WriteFailed)
}

/// Validate dimensions and return the number of buffer bytes the image uses.
pub(super) fn check_geometry(
    width: u32,
    height: u32,
    packed: &[u8],
) -> Result<usize, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidGeometry(format!(
            "image must be at least 1x1, got {width}x{height}"
        )));
    }
    let needed = row_stride(width)
        .checked_mul(height as usize)
        .ok_or_else(|| RasterError::InvalidGeometry(format!("{width}x{height} is too large")))?;
    if packed.len() < needed {
        return Err(RasterError::InvalidGeometry(format!(
            "{width}x{height} needs {needed} bytes, buffer holds {}",
            packed.len()
        )));
    }
    Ok(needed)
}
