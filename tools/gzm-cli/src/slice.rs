//! Cut a frame window out of a macro

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gzm_core::{check_slice, read_macro_file, slice, write_macro_file};

#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Source macro (.gzm)
    pub input: PathBuf,

    /// Output macro
    pub output: PathBuf,

    /// First frame to keep
    pub start: u32,

    /// Frame after the last one to keep
    pub end: u32,
}

pub fn execute(args: SliceArgs) -> Result<()> {
    let source = read_macro_file(&args.input)
        .with_context(|| format!("Failed to read macro: {}", args.input.display()))?
        .macro_data;

    let problems = check_slice(&source, args.start, args.end);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("{}: {}", args.input.display(), problem);
        }
        anyhow::bail!(
            "Could not slice {} from {} to {}",
            args.input.display(),
            args.start,
            args.end
        );
    }

    let sliced = slice(&source, args.start, args.end)
        .with_context(|| format!("Could not slice {}", args.input.display()))?;
    write_macro_file(&args.output, &sliced)
        .with_context(|| format!("Failed to write macro: {}", args.output.display()))?;

    tracing::info!(
        path = %args.output.display(),
        frames = sliced.input_frame_count(),
        seeds = sliced.seeds.len(),
        "wrote slice"
    );
    Ok(())
}
