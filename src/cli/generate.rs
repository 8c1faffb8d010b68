//! Batch label generation (`lcdtag generate ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lcdtag::{BatchProcessor, LabelEncoder};
use tracing::warn;

use crate::cli::common::{ChecksumParams, DepthArg};
use crate::cli::utils::read_input;

/// Arguments for `lcdtag generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text file with one ID per line (`-` for stdin).
    pub input: PathBuf,
    /// Directory receiving the `<id>.png` files.
    #[arg(short = 'o', long = "output", default_value = ".")]
    pub output: PathBuf,
    /// PNG bit depth.
    #[arg(long, default_value_t = DepthArg::One, value_enum)]
    pub depth: DepthArg,
    #[command(flatten)]
    pub checksum: ChecksumParams,
    /// Also write a JSON report of every line's outcome.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Execute `lcdtag generate`.
pub fn handle(args: GenerateArgs) -> Result<()> {
    let layout = args.checksum.layout();
    if layout.truncates_checksum() {
        warn!(
            modulus = layout.checksum_modulus,
            digits = layout.checksum_len,
            "modulus exceeds check code width; distinct remainders may collide"
        );
    }
    let encoder = LabelEncoder::new(layout)?;

    let text = read_input(&args.input)?;
    let processor = BatchProcessor::new(encoder, &args.output, args.depth.into());
    let report = processor.run(text.lines())?;

    if let Some(path) = &args.report {
        report.save(path)?;
        println!("Wrote report to {}", path.display());
    }

    println!(
        "Generated {} label(s) in {} ({} duplicate, {} invalid, {} failed)",
        report.written(),
        args.output.display(),
        report.duplicates(),
        report.invalid(),
        report.failed()
    );
    Ok(())
}
