//! Input loading, mode decision, and output dispatch.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use casebook_model::{CaseInput, CaseRecord};
use casebook_render::{TermRules, write_batch, write_single};

use crate::cli::Cli;

/// How the output was produced, for the summary printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Single,
    Batch,
}

/// Result of a successful run.
#[derive(Debug)]
pub struct RunResult {
    pub mode: OutputMode,
    pub output_path: PathBuf,
    /// Records as rendered (post-normalization, pre-sort).
    pub records: Vec<CaseRecord>,
}

/// Load the input, decide the output mode, render, and persist.
pub fn run(args: &Cli) -> Result<RunResult> {
    let input = &args.input;
    if !input.exists() {
        bail!("input file not found: {}", input.display());
    }

    // A broken rule file must fail before any output is written.
    let term_rules = args
        .term_rules
        .as_deref()
        .map(TermRules::load)
        .transpose()
        .context("load term rules")?;

    let text =
        fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let parsed: CaseInput = serde_json::from_str(&text).with_context(|| {
        format!(
            "{}: expected one case record object or a sequence of records",
            input.display()
        )
    })?;

    let batch = args.all || parsed.is_many();
    let mut records = parsed.into_records();
    debug!(record_count = records.len(), batch, "input loaded");

    if let Some(rules) = &term_rules {
        for record in &mut records {
            rules.normalize_record(record);
        }
        info!(
            record_count = records.len(),
            rule_count = rules.rule_count(),
            "terminology rules applied"
        );
    }

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("resolve working directory")?,
    };
    let output_path = output_path_for(input, batch, &output_dir);

    let mode = if batch {
        write_batch(&records, &output_path)?;
        OutputMode::Batch
    } else {
        let record = records.first().context("empty case record input")?;
        write_single(record, &output_path)?;
        OutputMode::Single
    };

    Ok(RunResult {
        mode,
        output_path,
        records,
    })
}

/// Derive the output file name from the input stem, per mode.
fn output_path_for(input: &Path, batch: bool, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("cases");
    let name = if batch {
        format!("{stem}_all.docx")
    } else {
        format!("{stem}.docx")
    };
    output_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_follows_mode() {
        let dir = Path::new("out");
        assert_eq!(
            output_path_for(Path::new("data/case1.json"), false, dir),
            Path::new("out/case1.docx")
        );
        assert_eq!(
            output_path_for(Path::new("data/case1.json"), true, dir),
            Path::new("out/case1_all.docx")
        );
    }
}
