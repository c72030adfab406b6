// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Results panel: summary counters, per-domain breakdown and the selection table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::selection::{ProcessingStats, SelectionReport, Status};

/// Messages emitted by the results view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsMsg {
    DownloadCsv,
    CopyCsv,
}

/// Badge color for a status cell.
pub fn status_color(status: Status) -> egui::Color32 {
    match status {
        Status::Match => egui::Color32::from_rgb(37, 99, 235),
        Status::General => egui::Color32::from_gray(120),
    }
}

/// One-line summary used in the status bar after a run.
pub fn summary_line(stats: &ProcessingStats) -> String {
    format!(
        "Found {} unique email(s) across {} domain(s); selected {}.",
        stats.total_emails_found, stats.total_domains, stats.total_selected
    )
}

/// Render results for the latest run. `has_run` distinguishes the placeholder from an empty outcome.
pub fn view(ui: &mut egui::Ui, report: Option<&SelectionReport>, has_run: bool) -> Vec<ResultsMsg> {
    let mut msgs = Vec::new();

    let Some(report) = report.filter(|r| !r.is_empty()) else {
        let hint = if has_run {
            "No valid emails found in the input text."
        } else {
            "Enter data and click 'Run Extraction' to see the grouped results."
        };
        ui.label(
            egui::RichText::new(hint)
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    };

    render_stats(ui, &report.stats);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui
            .button(format!(
                "{} Download Selected Emails (CSV)",
                egui_phosphor::regular::DOWNLOAD_SIMPLE
            ))
            .clicked()
        {
            msgs.push(ResultsMsg::DownloadCsv);
        }
        if ui
            .button(format!("{} Copy", egui_phosphor::regular::COPY))
            .on_hover_text("Copy the table as CSV to the clipboard")
            .clicked()
        {
            msgs.push(ResultsMsg::CopyCsv);
        }
    });
    ui.add_space(8.0);

    render_domain_summary(ui, report);
    ui.add_space(8.0);
    render_table(ui, report);

    msgs
}

fn render_stats(ui: &mut egui::Ui, stats: &ProcessingStats) {
    ui.columns(3, |cols| {
        stat_card(&mut cols[0], "Emails Found", stats.total_emails_found);
        stat_card(&mut cols[1], "Unique Domains", stats.total_domains);
        stat_card(&mut cols[2], "Selected List", stats.total_selected);
    });
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: usize) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(label)
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.heading(value.to_string());
    });
}

fn render_domain_summary(ui: &mut egui::Ui, report: &SelectionReport) {
    egui::CollapsingHeader::new(format!("Domains ({})", report.domains.len()))
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new("domain_summary_grid")
                .num_columns(4)
                .striped(true)
                .spacing(egui::vec2(12.0, 4.0))
                .show(ui, |ui| {
                    ui.strong("Domain");
                    ui.strong("Found");
                    ui.strong("Selected");
                    ui.strong("Matches");
                    ui.end_row();
                    for summary in &report.domains {
                        ui.label(&summary.domain);
                        ui.label(summary.total.to_string());
                        ui.label(summary.selected.to_string());
                        ui.label(summary.match_count.to_string());
                        ui.end_row();
                    }
                });
        });
}

fn render_table(ui: &mut egui::Ui, report: &SelectionReport) {
    let row_height = 20.0;
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(200.0))
        .column(Column::exact(80.0))
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong("Domain");
            });
            header.col(|ui| {
                ui.strong("Email");
            });
            header.col(|ui| {
                ui.strong("Status");
            });
        })
        .body(|body| {
            body.rows(row_height, report.records.len(), |mut row| {
                let record = &report.records[row.index()];
                row.col(|ui| {
                    ui.label(&record.domain);
                });
                row.col(|ui| {
                    ui.label(record.email.as_str());
                });
                row.col(|ui| {
                    ui.label(
                        egui::RichText::new(record.status.as_str())
                            .strong()
                            .color(status_color(record.status)),
                    );
                });
            });
        });
}
