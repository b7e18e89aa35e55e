//! Join two macros

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gzm_core::{
    Macro, MacroError, MergePolicy, Side, check_concat_at_seed, concat, concat_at_seed,
    read_macro_file, write_macro_file,
};

use crate::policy::MergeArgs;

#[derive(Args, Debug)]
pub struct ConcatArgs {
    /// First macro (.gzm)
    pub first: PathBuf,

    /// Second macro (.gzm)
    pub second: PathBuf,

    /// Output macro
    pub output: PathBuf,

    #[command(flatten)]
    pub merge: MergeArgs,
}

fn load(path: &Path) -> Result<Macro> {
    let decoded = read_macro_file(path)
        .with_context(|| format!("Failed to read macro: {}", path.display()))?;
    Ok(decoded.macro_data)
}

fn save(path: &Path, m: &Macro) -> Result<()> {
    write_macro_file(path, m)
        .with_context(|| format!("Failed to write macro: {}", path.display()))?;
    tracing::info!(path = %path.display(), frames = m.input_frame_count(), "wrote macro");
    Ok(())
}

/// Naive concatenation
pub fn execute(args: ConcatArgs) -> Result<()> {
    let a = load(&args.first)?;
    let b = load(&args.second)?;
    let joined = concat(&a, &b, MergePolicy::from(&args.merge)).with_context(|| {
        format!(
            "Could not concat {} with {}",
            args.first.display(),
            args.second.display()
        )
    })?;
    save(&args.output, &joined)
}

/// Seed-anchored concatenation
pub fn execute_at_seed(args: ConcatArgs) -> Result<()> {
    let a = load(&args.first)?;
    let b = load(&args.second)?;

    let problems = check_concat_at_seed(&a, &b);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("{}", describe(problem, &args));
        }
        anyhow::bail!(
            "Could not concat {} with {}",
            args.first.display(),
            args.second.display()
        );
    }

    let joined = concat_at_seed(&a, &b, MergePolicy::from(&args.merge)).with_context(|| {
        format!(
            "Could not concat {} with {}",
            args.first.display(),
            args.second.display()
        )
    })?;
    save(&args.output, &joined)
}

/// A precondition failure phrased with the offending file's name
fn describe(problem: &MacroError, args: &ConcatArgs) -> String {
    let path = |side: &Side| match side {
        Side::Second => args.second.display(),
        _ => args.first.display(),
    };
    match problem {
        MacroError::NoSeedData { side } => {
            format!("{} does not have any saved rng seeds", path(side))
        }
        MacroError::AnchorOutOfRange {
            side,
            frame,
            frame_count,
        } => format!(
            "{} has a seed at frame {frame} outside its {frame_count} input frames",
            path(side)
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gzm_core::{InputFrame, SeedEvent};
    use tempfile::TempDir;

    fn seeded(frames: usize, seed_frame: i32) -> Macro {
        Macro {
            inputs: vec![InputFrame::default(); frames],
            seeds: vec![SeedEvent {
                frame: seed_frame,
                old_seed: 1,
                new_seed: 2,
            }],
            ..Macro::new()
        }
    }

    fn args(dir: &TempDir, a: &Macro, b: &Macro) -> ConcatArgs {
        let first = dir.path().join("a.gzm");
        let second = dir.path().join("b.gzm");
        write_macro_file(&first, a).unwrap();
        write_macro_file(&second, b).unwrap();
        ConcatArgs {
            first,
            second,
            output: dir.path().join("out.gzm"),
            merge: MergeArgs::default(),
        }
    }

    #[test]
    fn concat_writes_joined_macro() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, &seeded(4, 1), &seeded(3, 0));
        let output = args.output.clone();

        execute(args).unwrap();
        let out = read_macro_file(&output).unwrap().macro_data;
        assert_eq!(out.input_frame_count(), 7);
        assert_eq!(out.seeds.len(), 2);
        assert_eq!(out.seeds[1].frame, 4);
    }

    #[test]
    fn concat_at_seed_writes_spliced_macro() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, &seeded(6, 4), &seeded(5, 1));
        let output = args.output.clone();

        execute_at_seed(args).unwrap();
        let out = read_macro_file(&output).unwrap().macro_data;
        assert_eq!(out.input_frame_count(), 4 + 4);
        assert_eq!(out.seeds.len(), 1);
    }

    #[test]
    fn concat_at_seed_fails_without_seeds() {
        let dir = TempDir::new().unwrap();
        let seedless = Macro {
            inputs: vec![InputFrame::default(); 3],
            ..Macro::new()
        };
        let args = args(&dir, &seeded(6, 4), &seedless);
        let output = args.output.clone();

        let problems = check_concat_at_seed(&seeded(6, 4), &seedless);
        assert_eq!(
            describe(&problems[0], &args),
            format!("{} does not have any saved rng seeds", args.second.display())
        );

        let err = execute_at_seed(args).unwrap_err();
        assert!(err.to_string().starts_with("Could not concat"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let args = ConcatArgs {
            first: dir.path().join("nope.gzm"),
            second: dir.path().join("nope2.gzm"),
            output: dir.path().join("out.gzm"),
            merge: MergeArgs::default(),
        };
        let err = execute(args).unwrap_err();
        assert!(err.to_string().contains("nope.gzm"));
    }
}
