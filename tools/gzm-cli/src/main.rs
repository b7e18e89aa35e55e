//! gzm - edit and inspect gz macro recordings
//!
//! # Commands
//!
//! - `gzm concat-at-seed` - Splice two macros where their RNG seeds meet
//! - `gzm concat` - Append one macro after another
//! - `gzm slice` - Cut a frame window out of a macro
//! - `gzm trim` - Keep the first frames of a macro
//! - `gzm stat` - Print counters and seed events
//!
//! # Usage
//!
//! ```bash
//! # Join two segments recorded from a shared seed
//! gzm concat-at-seed part1.gzm part2.gzm full.gzm
//!
//! # Frames 120..600 of a run
//! gzm slice full.gzm cut.gzm 120 600
//!
//! # Inspect, with per-frame inputs
//! gzm stat cut.gzm --inputs
//! ```
//!
//! Set `RUST_LOG=debug` to trace file I/O and edits on stderr.

mod concat;
mod policy;
mod slice;
mod stat;
mod trim;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// gzm - edit and inspect gz macro recordings
#[derive(Parser)]
#[command(name = "gzm")]
#[command(about = "Edit and inspect gz macro recordings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Splice two macros at the first's last seed and the second's first seed
    ConcatAtSeed(concat::ConcatArgs),

    /// Append the second macro after the first
    Concat(concat::ConcatArgs),

    /// Extract frames [start, end) into a new macro
    Slice(slice::SliceArgs),

    /// Keep the first END frames
    Trim(trim::TrimArgs),

    /// Print macro counters and seed events
    Stat(stat::StatArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ConcatAtSeed(args) => concat::execute_at_seed(args),
        Commands::Concat(args) => concat::execute(args),
        Commands::Slice(args) => slice::execute(args),
        Commands::Trim(args) => trim::execute(args),
        Commands::Stat(args) => stat::execute(args),
    }
}
