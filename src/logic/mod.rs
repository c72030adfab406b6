// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: the extraction → grouping → selection pipeline and CSV export.

pub mod export;
pub mod extract;
pub mod select;

use crate::models::keywords::KeywordSet;
use crate::models::selection::{ProcessingStats, SelectionReport};

pub use extract::extract;

/// Run extraction and selection over `text` and summarize the outcome.
///
/// Pure apart from tracing; an input without addresses yields an empty report.
pub fn run_pipeline(text: &str, keywords: &KeywordSet) -> SelectionReport {
    let emails = extract(text);
    let selections = select::select_by_domain(&emails, keywords);

    let records: Vec<_> = selections
        .iter()
        .flat_map(|selection| selection.records())
        .collect();
    let domains: Vec<_> = selections
        .iter()
        .map(select::DomainSelection::summary)
        .collect();

    let stats = ProcessingStats {
        total_emails_found: emails.len(),
        total_domains: selections.len(),
        total_selected: records.len(),
    };
    tracing::info!(
        emails = stats.total_emails_found,
        domains = stats.total_domains,
        selected = stats.total_selected,
        keywords = keywords.len(),
        "pipeline finished"
    );

    SelectionReport {
        records,
        domains,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::select::select;
    use crate::models::selection::Status;

    const SAMPLE: &str =
        "Contact John at john.doe@acme.com or our CEO at ceo@acme.com, also info@other.org";

    #[test]
    fn run_pipeline_end_to_end_scenario() {
        let report = run_pipeline(SAMPLE, &KeywordSet::parse("ceo, founder"));

        let rows: Vec<_> = report
            .records
            .iter()
            .map(|r| (r.domain.as_str(), r.email.as_str(), r.status))
            .collect();
        assert_eq!(
            rows,
            [
                ("acme.com", "ceo@acme.com", Status::Match),
                ("acme.com", "john.doe@acme.com", Status::General),
                ("other.org", "info@other.org", Status::General),
            ]
        );
        assert_eq!(
            report.stats,
            ProcessingStats {
                total_emails_found: 3,
                total_domains: 2,
                total_selected: 3,
            }
        );
    }

    #[test]
    fn run_pipeline_summarizes_domains() {
        let report = run_pipeline(SAMPLE, &KeywordSet::parse("ceo"));

        assert_eq!(report.domains.len(), 2);
        let acme = &report.domains[0];
        assert_eq!(acme.domain, "acme.com");
        assert_eq!((acme.total, acme.selected, acme.match_count), (2, 2, 1));
        let other = &report.domains[1];
        assert_eq!((other.total, other.selected, other.match_count), (1, 1, 0));
    }

    #[test]
    fn run_pipeline_matches_select_output() {
        let keywords = KeywordSet::parse("ceo");
        let report = run_pipeline(SAMPLE, &keywords);

        assert_eq!(report.records, select(&extract(SAMPLE), &keywords));
    }

    #[test]
    fn run_pipeline_summaries_agree_with_records_over_the_cap() {
        let mut text = String::new();
        for i in 0..7 {
            text.push_str(&format!("staff{i}@big.com "));
        }
        text.push_str("manager@big.com lead@big.com hello@small.net");
        let keywords = KeywordSet::parse("manager, lead");

        let report = run_pipeline(&text, &keywords);

        assert_eq!(report.records, select(&extract(&text), &keywords));
        let big = &report.domains[0];
        assert_eq!(big.domain, "big.com");
        assert_eq!((big.total, big.selected, big.match_count), (9, 5, 2));
        let small = &report.domains[1];
        assert_eq!((small.total, small.selected, small.match_count), (1, 1, 0));
        for summary in &report.domains {
            let rows = report
                .records
                .iter()
                .filter(|r| r.domain == summary.domain)
                .count();
            assert_eq!(rows, summary.selected);
        }
    }

    #[test]
    fn run_pipeline_without_addresses_is_empty() {
        let report = run_pipeline("nothing to see here", &KeywordSet::parse("ceo"));

        assert!(report.is_empty());
        assert!(report.domains.is_empty());
        assert_eq!(report.stats, ProcessingStats::default());
    }
}
