//! Print macro counters and events

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gzm_core::diagnostics::{InputList, SeedList, Stats};
use gzm_core::{Completeness, Decoded, read_macro_file};

#[derive(Args, Debug)]
pub struct StatArgs {
    /// Macro to inspect (.gzm)
    pub input: PathBuf,

    /// Also list every input frame
    #[arg(long)]
    pub inputs: bool,

    /// Print a JSON document instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StatArgs) -> Result<()> {
    let decoded = read_macro_file(&args.input)
        .with_context(|| format!("Failed to read macro: {}", args.input.display()))?;
    println!("{}", render(&args, &decoded)?);
    Ok(())
}

fn render(args: &StatArgs, decoded: &Decoded) -> Result<String> {
    let m = &decoded.macro_data;

    if args.json {
        let mut doc = serde_json::json!({
            "path": args.input.display().to_string(),
            "completeness": decoded.completeness,
            "stats": Stats::of(m),
            "seeds": m.seeds,
        });
        if args.inputs {
            doc["inputs"] = serde_json::to_value(&m.inputs)?;
        }
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    let mut text = String::new();
    if let Completeness::Truncated { section } = decoded.completeness {
        text.push_str(&format!("warning: file ends inside {section}\n"));
    }
    text.push_str(&Stats::of(m).to_string());
    text.push_str(&SeedList(&m.seeds).to_string());
    if args.inputs {
        text.push_str(&InputList(&m.inputs).to_string());
    }
    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gzm_core::{InputFrame, Macro, SeedEvent, encode, write_macro_file};
    use tempfile::TempDir;

    fn sample() -> Macro {
        Macro {
            inputs: vec![InputFrame::default(); 2],
            seeds: vec![SeedEvent {
                frame: 1,
                old_seed: 0x10,
                new_seed: 0x20,
            }],
            rerecords: 4,
            ..Macro::new()
        }
    }

    fn stat_args(input: PathBuf) -> StatArgs {
        StatArgs {
            input,
            inputs: false,
            json: false,
        }
    }

    #[test]
    fn text_report_lists_stats_then_seeds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("m.gzm");
        write_macro_file(&path, &sample()).unwrap();
        let decoded = read_macro_file(&path).unwrap();

        let text = render(&stat_args(path), &decoded).unwrap();
        assert!(text.starts_with("n_input: 2\nn_seed: 1\n"));
        assert!(text.contains("rerecords: 4\n"));
        assert!(text.ends_with("gzm has 1 seeds:\n  frame: 1, old: 00000010, new: 00000020"));
    }

    #[test]
    fn text_report_warns_on_truncation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cut.gzm");
        let bytes = encode(&sample()).unwrap();
        std::fs::write(&path, &bytes[..14]).unwrap();
        let decoded = read_macro_file(&path).unwrap();

        let text = render(&stat_args(path.clone()), &decoded).unwrap();
        assert!(text.starts_with("warning: file ends inside inputs\n"));
        assert!(execute(stat_args(path)).is_ok());
    }

    #[test]
    fn json_report_includes_inputs_on_request() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("m.gzm");
        write_macro_file(&path, &sample()).unwrap();
        let decoded = read_macro_file(&path).unwrap();

        let args = StatArgs {
            input: path,
            inputs: true,
            json: true,
        };
        let doc: serde_json::Value = serde_json::from_str(&render(&args, &decoded).unwrap()).unwrap();
        assert_eq!(doc["completeness"], "Full");
        assert_eq!(doc["stats"]["n_seed"], 1);
        assert_eq!(doc["seeds"][0]["new_seed"], 0x20);
        assert_eq!(doc["inputs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(execute(stat_args(dir.path().join("absent.gzm"))).is_err());
    }
}
