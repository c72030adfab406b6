// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! CSV serialization of selection records for download.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::selection::SelectionRecord;

/// File name suggested by the save dialog.
pub const DEFAULT_EXPORT_NAME: &str = "selected_emails.csv";

/// Column header written as the first row.
pub const CSV_HEADER: [&str; 3] = ["Domain", "Email", "Status"];

/// Write the header and one row per record to `writer`.
pub fn write_csv<W: Write>(writer: W, records: &[SelectionRecord]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;
    for record in records {
        out.write_record([
            record.domain.as_str(),
            record.email.as_str(),
            record.status.as_str(),
        ])
        .with_context(|| format!("Failed to write CSV row for {}", record.email))?;
    }
    out.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Render records as an in-memory CSV document.
pub fn to_csv_string(records: &[SelectionRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    String::from_utf8(buf).context("CSV output is not valid UTF-8")
}

/// Write records to a CSV file at `output`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created or written.
pub fn export_csv(output: &Path, records: &[SelectionRecord]) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let file =
        File::create(output).with_context(|| format!("Failed to create CSV file {:?}", output))?;
    write_csv(file, records).with_context(|| format!("Failed to export CSV to {:?}", output))?;
    tracing::info!(path = %output.display(), rows = records.len(), "exported CSV");
    Ok(())
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps existing matching extension (case-insensitive); otherwise replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::email::EmailAddress;
    use crate::models::selection::Status;

    fn record(domain: &str, email: &str, status: Status) -> SelectionRecord {
        SelectionRecord {
            domain: domain.into(),
            email: EmailAddress::new(email).unwrap(),
            status,
        }
    }

    #[test]
    fn to_csv_string_writes_header_and_rows() {
        let records = vec![
            record("acme.com", "ceo@acme.com", Status::Match),
            record("other.org", "info@other.org", Status::General),
        ];

        let csv = to_csv_string(&records).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(
            lines,
            [
                "Domain,Email,Status",
                "acme.com,ceo@acme.com,Match",
                "other.org,info@other.org,General",
            ]
        );
    }

    #[test]
    fn to_csv_string_of_no_records_is_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), ["Domain,Email,Status"]);
    }

    #[test]
    fn to_csv_string_leaves_plain_symbols_unquoted() {
        // `%` and `+` stay bare; only separators and quotes need quoting.
        let records = vec![record("x.com", "a+b%c@x.com", Status::General)];
        let csv = to_csv_string(&records).unwrap();
        assert!(csv.contains("x.com,a+b%c@x.com,General"));
    }

    #[test]
    fn export_csv_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested").join("selected_emails.csv");
        let records = vec![record("acme.com", "ceo@acme.com", Status::Match)];

        export_csv(&out, &records).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("Domain,Email,Status"));
        assert!(written.contains("acme.com,ceo@acme.com,Match"));
    }

    // Should leave an existing matching extension untouched, ignoring case.
    #[test]
    fn ensure_extension_preserves_matching_extension_case_insensitive() {
        let path = PathBuf::from("/tmp/report.CSV");
        let result = ensure_extension(path.clone(), "csv");

        assert_eq!(result, path);
    }

    // Should replace an unmatched extension with the requested one.
    #[test]
    fn ensure_extension_replaces_when_different() {
        let path = PathBuf::from("report.txt");
        let result = ensure_extension(path, "csv");

        assert_eq!(result.extension().and_then(|e| e.to_str()), Some("csv"));
    }
}
