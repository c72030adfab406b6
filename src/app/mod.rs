// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the AVANA window.

use crate::models::keywords::KeywordSet;
use crate::ui::AvanaApp;
use eframe::egui;
use egui_phosphor::Variant;

/// Bootstrap the desktop application with `keywords` preloaded and run the egui event loop.
pub fn run(keywords: KeywordSet) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AVANA Marketing")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    tracing::info!(keywords = keywords.len(), "launching window");
    eframe::run_native(
        "AVANA Marketing",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(AvanaApp::new(&keywords)))
        }),
    )
}
