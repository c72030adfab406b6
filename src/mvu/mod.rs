// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;

use crate::logic::export::export_csv;
use crate::logic::run_pipeline;
use crate::models::keywords::KeywordSet;
use crate::models::selection::{SelectionRecord, SelectionReport};
use crate::ui::components::keywords::{self, KeywordsModel, KeywordsMsg};
use crate::ui::components::results::summary_line;

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Pasted text to scan for addresses.
    pub raw_text: String,
    /// Role keyword editor state.
    pub keywords: KeywordsModel,
    /// Outcome of the latest completed run.
    pub report: Option<SelectionReport>,
    /// Whether a run has been requested at least once.
    pub has_run: bool,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    RawTextChanged(String),
    ClearInput,
    RunRequested,
    RunCompleted(SelectionReport),
    ExportRequested(PathBuf),
    ExportCancelled,
    ExportCompleted(Result<PathBuf, String>),
    /// Clipboard copy finished; carries the number of rows copied.
    CopyCompleted(Result<usize, String>),
    DismissError,
    Keywords(KeywordsMsg),
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    RunExtraction { text: String, keywords: KeywordSet },
    ExportCsv(ExportPayload),
}

/// Captured data for writing a CSV export.
pub struct ExportPayload {
    /// Destination path (with `.csv` extension enforced).
    pub output: PathBuf,
    /// Records of the latest run, in display order.
    pub records: Vec<SelectionRecord>,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::RawTextChanged(text) => model.raw_text = text,
        Msg::ClearInput => {
            model.raw_text.clear();
            model.report = None;
            model.has_run = false;
            model.status = None;
        }
        Msg::DismissError => model.error = None,
        Msg::Keywords(m) => {
            if let Some(event) = keywords::update(&mut model.keywords, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::RunRequested => {
            if model.raw_text.is_empty() {
                surface_event(
                    model,
                    "Please enter some email data to process.".to_string(),
                    true,
                );
                return;
            }
            model.has_run = true;
            cmds.push(Command::RunExtraction {
                text: model.raw_text.clone(),
                keywords: model.keywords.keyword_set(),
            });
        }
        Msg::RunCompleted(report) => {
            let message = if report.is_empty() {
                "No valid emails found in the input text.".to_string()
            } else {
                summary_line(&report.stats)
            };
            model.report = Some(report);
            surface_event(model, message, false);
        }
        Msg::ExportRequested(output) => match validate_for_export(model, output) {
            Ok(payload) => cmds.push(Command::ExportCsv(payload)),
            Err(err) => surface_event(model, err, true),
        },
        Msg::ExportCancelled => surface_event(model, "Export cancelled.".to_string(), false),
        Msg::ExportCompleted(result) => match result {
            Ok(path) => surface_event(model, format!("CSV saved: {}", path.display()), false),
            Err(err) => surface_event(model, format!("Failed to export CSV:\n\n{err}"), true),
        },
        Msg::CopyCompleted(result) => match result {
            Ok(rows) => surface_event(model, format!("Copied {rows} row(s) as CSV."), false),
            Err(err) => surface_event(model, format!("Failed to copy CSV:\n\n{err}"), true),
        },
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::RunExtraction { text, keywords } => {
            Msg::RunCompleted(run_pipeline(&text, &keywords))
        }
        Command::ExportCsv(payload) => {
            let res = export_csv(&payload.output, &payload.records).map(|_| payload.output.clone());
            if let Err(err) = &res {
                tracing::warn!(path = %payload.output.display(), "CSV export failed: {err:#}");
            }
            Msg::ExportCompleted(res.map_err(|e| format!("{e:#}")))
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Check there is something to export and build the payload.
fn validate_for_export(model: &AppModel, output: PathBuf) -> Result<ExportPayload, String> {
    let records = model
        .report
        .as_ref()
        .map(|r| r.records.clone())
        .unwrap_or_default();
    if records.is_empty() {
        return Err("Nothing to export; run an extraction with results first.".into());
    }
    Ok(ExportPayload { output, records })
}
