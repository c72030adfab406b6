// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::models::keywords::{DEFAULT_KEYWORDS, KeywordSet};

/// Output style for log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// AVANA mail picker - select role contacts per domain from pasted text
#[derive(Clone, Debug, Parser)]
#[command(name = "avana-mail-picker")]
#[command(version, about, long_about = None)]
pub struct AppConfig {
    /// Comma-separated role keywords that prioritize addresses
    #[arg(long, default_value = DEFAULT_KEYWORDS)]
    pub keywords: String,

    /// Process this text file without opening the window
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// CSV destination for headless runs (stdout when omitted)
    #[arg(long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Default log filter; `RUST_LOG` takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::parse(&self.keywords)
    }
}
