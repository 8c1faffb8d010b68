//! Check code calculator (`lcdtag checksum ...`).

use anyhow::Result;
use clap::Args;
use lcdtag::compute_checksum;

use crate::cli::common::ChecksumParams;

/// Arguments for `lcdtag checksum`.
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Digit string to check.
    pub digits: String,
    #[command(flatten)]
    pub params: ChecksumParams,
    /// Print the check code followed by the input, as shown on the panel.
    #[arg(long)]
    pub full: bool,
}

/// Execute `lcdtag checksum`.
pub fn handle(args: ChecksumArgs) -> Result<()> {
    let code = compute_checksum(&args.digits, args.params.modulus, args.params.checksum_len)?;
    if args.full {
        println!("{}{}", code, args.digits);
    } else {
        println!("{}", code);
    }
    Ok(())
}
