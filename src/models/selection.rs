// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Selection output types shared between the pipeline, the results table and CSV export.

use crate::models::email::EmailAddress;

/// Why an address was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Local part contains one of the role keywords.
    Match,
    /// Filled a remaining slot in lexicographic order.
    General,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Match => "Match",
            Status::General => "General",
        }
    }
}

/// One selected address, labeled with its domain and status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionRecord {
    pub domain: String,
    pub email: EmailAddress,
    pub status: Status,
}

/// Aggregate counters shown above the results table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_emails_found: usize,
    pub total_domains: usize,
    pub total_selected: usize,
}

/// Per-domain breakdown of how many addresses were found and kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSummary {
    pub domain: String,
    /// Unique addresses seen for the domain.
    pub total: usize,
    /// Addresses kept after truncation.
    pub selected: usize,
    /// Kept addresses that matched a keyword.
    pub match_count: usize,
}

/// Everything a single pipeline run produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionReport {
    pub records: Vec<SelectionRecord>,
    pub domains: Vec<DomainSummary>,
    pub stats: ProcessingStats,
}

impl SelectionReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
