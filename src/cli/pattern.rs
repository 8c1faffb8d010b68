//! Glyph table viewer (`lcdtag pattern ...`).

use anyhow::Result;
use clap::Args;
use lcdtag::map_digits_to_pattern;

/// Arguments for `lcdtag pattern`.
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Digits to map (defaults to the full table).
    #[arg(default_value = "0123456789")]
    pub digits: String,
}

/// Execute `lcdtag pattern`.
pub fn handle(args: PatternArgs) -> Result<()> {
    let glyphs = map_digits_to_pattern(&args.digits)?;
    for (ch, glyph) in args.digits.chars().zip(glyphs) {
        println!("{ch}  {glyph:08b}  0x{glyph:02X}");
    }
    Ok(())
}
