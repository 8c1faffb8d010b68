//! Shared clap helper types for CLI commands.

use clap::{Args, ValueEnum};
use lcdtag::{LabelLayout, OutputDepth};

/// Bit depth of generated PNG files.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DepthArg {
    /// 1-bit greyscale.
    One,
    /// 8-bit greyscale.
    Eight,
}

impl From<DepthArg> for OutputDepth {
    fn from(value: DepthArg) -> OutputDepth {
        match value {
            DepthArg::One => OutputDepth::One,
            DepthArg::Eight => OutputDepth::Eight,
        }
    }
}

/// Check code parameters shared by `generate` and `checksum`.
#[derive(Args, Debug, Clone, Copy)]
pub struct ChecksumParams {
    /// Modulus applied to the reversed digits.
    #[arg(long, default_value_t = 97)]
    pub modulus: u64,
    /// Number of check code digits.
    #[arg(long = "checksum-len", default_value_t = 2)]
    pub checksum_len: usize,
}

impl ChecksumParams {
    /// Default layout with these check code parameters applied.
    pub fn layout(self) -> LabelLayout {
        LabelLayout {
            checksum_modulus: self.modulus,
            checksum_len: self.checksum_len,
            ..LabelLayout::default()
        }
    }
}
