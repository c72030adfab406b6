// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for picking role contacts from pasted text.
//! Handles layout, the input form, and wiring to the background pipeline and CSV export.

pub mod components;

use eframe::egui;

use crate::logic::export::{DEFAULT_EXPORT_NAME, ensure_extension, to_csv_string};
use crate::models::keywords::KeywordSet;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::keywords::{self, KeywordsModel};
use crate::ui::components::results::{self, ResultsMsg};

/// Stateful egui application for extracting and exporting selected emails.
pub struct AvanaApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl AvanaApp {
    /// Build the app with `keywords` preloaded and spawn the command workers.
    pub fn new(keywords: &KeywordSet) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }
        tracing::debug!(threads, "command workers started");

        Self {
            model: AppModel {
                keywords: KeywordsModel::from_set(keywords),
                ..Default::default()
            },
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for AvanaApp {
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker replies, applies queued messages to the model,
    /// dispatches resulting commands, then renders the top bar, status bar, input column and results.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        if self.model.pending_commands > 0 {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(format!(
                    "{} AVANA Marketing",
                    egui_phosphor::regular::ENVELOPE_SIMPLE
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                });
            });
            ui.label(
                egui::RichText::new(
                    "Paste any text, pick up to five role contacts per domain, export as CSV.",
                )
                .small()
                .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::SidePanel::left("input_panel")
            .resizable(true)
            .default_width(360.0)
            .min_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_text_input(ui);
                    ui.add_space(12.0);

                    let kw_msgs = keywords::view(ui, &self.model.keywords);
                    self.inbox.extend(kw_msgs.into_iter().map(Msg::Keywords));
                    ui.add_space(12.0);

                    self.render_run_button(ui);
                    ui.add_space(8.0);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Extraction Results");
            ui.add_space(8.0);
            let result_msgs = results::view(ui, self.model.report.as_ref(), self.model.has_run);
            for msg in result_msgs {
                match msg {
                    ResultsMsg::DownloadCsv => self.pick_export_path(),
                    ResultsMsg::CopyCsv => self.copy_csv(ctx),
                }
            }
        });
    }
}

impl AvanaApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render the paste area for raw text.
    fn render_text_input(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Paste Email List");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(
                        !self.model.raw_text.is_empty(),
                        egui::Button::new(egui_phosphor::regular::ERASER),
                    )
                    .on_hover_text("Clear input and results")
                    .clicked()
                {
                    self.inbox.push(Msg::ClearInput);
                }
            });
        });
        ui.label(
            egui::RichText::new("Supports any text format containing email addresses.")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);

        let mut text = self.model.raw_text.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut text)
                    .desired_rows(14)
                    .desired_width(f32::INFINITY)
                    .hint_text("Paste your raw list of emails here (e.g. from CSV or text)..."),
            )
            .changed()
        {
            self.inbox.push(Msg::RawTextChanged(text));
        }
    }

    /// Render the primary action; disabled while a run or export is in flight.
    fn render_run_button(&mut self, ui: &mut egui::Ui) {
        let idle = self.model.pending_commands == 0;
        let button = egui::Button::new(format!(
            "{} Run Extraction",
            egui_phosphor::regular::MAGNIFYING_GLASS
        ))
        .min_size(egui::vec2(ui.available_width(), 32.0));

        if ui
            .add_enabled(idle, button)
            .on_disabled_hover_text("Processing…")
            .clicked()
        {
            self.inbox.push(Msg::RunRequested);
        }
    }

    /// Open the native save dialog and queue the export (or its cancellation).
    fn pick_export_path(&mut self) {
        let dialog = rfd::FileDialog::new()
            .set_title("Download selected emails")
            .add_filter("CSV", &["csv"])
            .set_file_name(DEFAULT_EXPORT_NAME);

        if let Some(path) = dialog.save_file() {
            self.inbox
                .push(Msg::ExportRequested(ensure_extension(path, "csv")));
        } else {
            self.inbox.push(Msg::ExportCancelled);
        }
    }

    /// Put the current selection on the clipboard as CSV text.
    fn copy_csv(&mut self, ctx: &egui::Context) {
        let Some(report) = &self.model.report else {
            return;
        };
        let result = to_csv_string(&report.records)
            .map(|csv| {
                ctx.copy_text(csv);
                report.records.len()
            })
            .map_err(|err| format!("{err:#}"));
        self.inbox.push(Msg::CopyCompleted(result));
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
                }
            });
        } else if self.model.pending_commands > 0 {
            ui.add(egui::Spinner::new().size(14.0));
        }
    }
}
