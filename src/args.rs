use std::ops::Range;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use revcode::Preset;

#[derive(Parser, Debug)]
#[command(name = "revcode")]
#[command(about = "Encode and decode reversible short codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Named configuration to use
    #[arg(short, long, global = true, default_value_t = Preset::Reference)]
    pub preset: Preset,

    /// TOML configuration file (overrides --preset)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a store and sequence pair into a code
    #[command(alias = "e")]
    Encode {
        /// Store identifier
        store: u64,

        /// Sequence number
        sequence: u64,

        /// Truncate out-of-range values instead of rejecting them
        #[arg(long)]
        wrap: bool,
    },

    /// Decode one or more codes
    #[command(alias = "d")]
    Decode {
        /// Codes to decode
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Print a round-trip table over ranges of stores and sequences
    Table {
        /// Half-open store range, e.g. 20..25
        #[arg(long, default_value = "20..25", value_parser = parse_range)]
        stores: Range<u64>,

        /// Half-open sequence range, e.g. 2000..2100
        #[arg(long, default_value = "2000..2100", value_parser = parse_range)]
        sequences: Range<u64>,
    },

    /// Show the active configuration and its limits
    Info,
}

fn parse_range(text: &str) -> Result<Range<u64>, String> {
    let (start, end) = text
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, found {:?}", text))?;
    let start: u64 = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid range start {:?}: {}", start, e))?;
    let end: u64 = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid range end {:?}: {}", end, e))?;
    if start > end {
        return Err(format!("range start {} is after end {}", start, end));
    }
    Ok(start..end)
}
