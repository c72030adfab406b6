// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Window-less batch mode: read a text file, select contacts, write CSV.

use std::path::Path;

use anyhow::{Context, Result};

use crate::logic::export::{ensure_extension, export_csv, write_csv};
use crate::logic::run_pipeline;
use crate::models::keywords::KeywordSet;
use crate::models::selection::SelectionReport;

/// Run the pipeline over the file at `input` and write the CSV to `output`
/// (or stdout when `None`).
pub fn run(input: &Path, output: Option<&Path>, keywords: &KeywordSet) -> Result<SelectionReport> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file {:?}", input))?;

    let report = run_pipeline(&text, keywords);
    if report.is_empty() {
        tracing::warn!(path = %input.display(), "no valid emails found in the input text");
    }

    match output {
        Some(path) => {
            let path = ensure_extension(path.to_path_buf(), "csv");
            export_csv(&path, &report.records)?;
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(stdout.lock(), &report.records)?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn run_writes_selected_rows_to_output_file() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("leads.txt");
        let output = tmp.path().join("picked");
        std::fs::write(
            &input,
            "Contact John at john.doe@acme.com or our CEO at ceo@acme.com, also info@other.org",
        )
        .unwrap();

        let report = run(&input, Some(&output), &KeywordSet::parse("ceo, founder")).unwrap();

        assert_eq!(report.stats.total_selected, 3);
        let written = std::fs::read_to_string(tmp.path().join("picked.csv")).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(
            lines,
            [
                "Domain,Email,Status",
                "acme.com,ceo@acme.com,Match",
                "acme.com,john.doe@acme.com,General",
                "other.org,info@other.org,General",
            ]
        );
    }

    #[test]
    fn run_reports_missing_input_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.txt");

        let err = run(&missing, None, &KeywordSet::default()).unwrap_err();

        assert!(err.to_string().contains("Failed to read input file"));
    }
}
