//! Command-line interface wiring for the `lcdtag` binary.
//!
//! This module owns the clap definitions and hands each subcommand to its
//! own submodule.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod checksum;
pub mod common;
pub mod generate;
pub mod inspect;
pub mod pattern;
pub mod utils;

/// Parsed CLI entrypoint for the `lcdtag` binary.
#[derive(Parser, Debug)]
#[command(
    name = "lcdtag",
    version,
    about = "Generate seven-segment LCD label images from 4-digit IDs"
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one PNG per ID listed in a text file.
    Generate(generate::GenerateArgs),
    /// Print the check code for a digit string.
    Checksum(checksum::ChecksumArgs),
    /// Show the segment glyph bytes for a digit string.
    Pattern(pattern::PatternArgs),
    /// Decode a label PNG and print its header and row.
    Inspect(inspect::InspectArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate::handle(args),
        Command::Checksum(args) => checksum::handle(args),
        Command::Pattern(args) => pattern::handle(args),
        Command::Inspect(args) => inspect::handle(args),
    }
}
