// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod config;
mod headless;
mod logging;
mod logic;
mod models;
mod mvu;
mod ui;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    logging::init_logging(&config.log_level, config.log_format);

    let keywords = config.keyword_set();
    match config.input.as_deref() {
        Some(input) => {
            let report = headless::run(input, config.output.as_deref(), &keywords)?;
            tracing::info!(
                emails = report.stats.total_emails_found,
                domains = report.stats.total_domains,
                selected = report.stats.total_selected,
                "headless run complete"
            );
            Ok(())
        }
        None => app::run(keywords).map_err(|err| anyhow!("Window failed: {err}")),
    }
}
