//! Label decoding (`lcdtag inspect ...`).

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lcdtag::{LabelLayout, compute_checksum, digit_for_glyph, invert_polarity};
use png::{BitDepth, ColorType, Transformations};

use crate::cli::common::ChecksumParams;
use crate::cli::utils::hex_bytes;

/// Arguments for `lcdtag inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// PNG file to decode.
    pub file: PathBuf,
    #[command(flatten)]
    pub checksum: ChecksumParams,
}

/// Execute `lcdtag inspect`.
pub fn handle(args: InspectArgs) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("{} is not a readable PNG", args.file.display()))?;
    let interlaced = reader.info().interlaced;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Size:        {}x{}", frame.width, frame.height);
    println!("Bit depth:   {:?}", frame.bit_depth);
    println!("Color type:  {:?}", frame.color_type);
    println!("Interlaced:  {}", interlaced);

    if frame.bit_depth != BitDepth::One || frame.color_type != ColorType::Grayscale {
        println!("Not a 1-bit greyscale label; row data not shown.");
        return Ok(());
    }

    let packed = invert_polarity(&buf[..frame.line_size]);
    println!("Row:         {}", hex_bytes(&packed));

    let layout = args.checksum.layout();
    let Some(glyphs) = layout.glyph_span().and_then(|span| packed.get(span)) else {
        return Ok(());
    };
    let digits: Option<String> = glyphs.iter().map(|g| digit_for_glyph(*g)).collect();
    match digits {
        Some(digits) => {
            let (check, id) = digits.split_at(layout.checksum_len);
            println!("Digits:      {}", digits);
            println!("Checksum:    {}", checksum_verdict(&layout, check, id));
        }
        None => println!("Digits:      (row does not hold a label)"),
    }
    Ok(())
}

fn checksum_verdict(layout: &LabelLayout, check: &str, id: &str) -> String {
    match compute_checksum(id, layout.checksum_modulus, layout.checksum_len) {
        Ok(expected) if expected.as_str() == check => format!("{check} ok"),
        Ok(expected) => format!("{check} MISMATCH (expected {expected})"),
        Err(err) => format!("{check} unverifiable: {err}"),
    }
}
