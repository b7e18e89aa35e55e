//! Keep a prefix of a macro

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gzm_core::{read_macro_file, trim, write_macro_file};

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Source macro (.gzm)
    pub input: PathBuf,

    /// Output macro
    pub output: PathBuf,

    /// Number of frames to keep
    pub end: u32,
}

pub fn execute(args: TrimArgs) -> Result<()> {
    let source = read_macro_file(&args.input)
        .with_context(|| format!("Failed to read macro: {}", args.input.display()))?
        .macro_data;

    let trimmed = trim(&source, args.end)
        .with_context(|| format!("Could not trim {}", args.input.display()))?;
    write_macro_file(&args.output, &trimmed)
        .with_context(|| format!("Failed to write macro: {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), frames = args.end, "wrote trimmed macro");
    Ok(())
}
