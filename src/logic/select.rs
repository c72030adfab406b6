// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain grouping and keyword-prioritized top-N selection.
//!
//! Responsibilities:
//! - Bucket addresses by the domain after `@`, keeping first-seen domain order.
//! - Rank each bucket: keyword hits first (shortest first), then the rest alphabetically.
//! - Truncate each bucket to [`MAX_PER_DOMAIN`] and label every kept address.

use std::collections::HashMap;

use crate::models::email::{EmailAddress, UniqueEmails};
use crate::models::keywords::KeywordSet;
use crate::models::selection::{DomainSummary, SelectionRecord, Status};

/// Upper bound of records emitted per domain.
pub const MAX_PER_DOMAIN: usize = 5;

/// Addresses sharing one domain, in the order they were grouped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainGroup<'a> {
    pub domain: &'a str,
    pub emails: Vec<&'a EmailAddress>,
}

/// Partition `emails` by domain; domains appear in first-encountered order.
///
/// Values that cannot be split at `@` are skipped.
pub fn group_by_domain(emails: &UniqueEmails) -> Vec<DomainGroup<'_>> {
    let mut groups: Vec<DomainGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for email in emails {
        let Some((_, domain)) = email.split() else {
            tracing::warn!(email = %email, "skipping address without domain");
            continue;
        };
        match index.get(domain) {
            Some(&slot) => groups[slot].emails.push(email),
            None => {
                index.insert(domain, groups.len());
                groups.push(DomainGroup {
                    domain,
                    emails: vec![email],
                });
            }
        }
    }

    groups
}

/// Rank one domain's addresses and keep the top [`MAX_PER_DOMAIN`].
///
/// Keyword hits come first, shortest address first with alphabetical
/// tie-break; the remaining addresses follow alphabetically.
pub fn rank_group<'a>(
    group: &DomainGroup<'a>,
    keywords: &KeywordSet,
) -> Vec<(&'a EmailAddress, Status)> {
    let (mut priority, mut others): (Vec<&EmailAddress>, Vec<&EmailAddress>) = group
        .emails
        .iter()
        .copied()
        .partition(|email| keywords.matches(email.local_part()));

    priority.sort_by(|a, b| {
        a.as_str()
            .len()
            .cmp(&b.as_str().len())
            .then_with(|| a.as_str().cmp(b.as_str()))
    });
    others.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    priority
        .into_iter()
        .map(|email| (email, Status::Match))
        .chain(others.into_iter().map(|email| (email, Status::General)))
        .take(MAX_PER_DOMAIN)
        .collect()
}

/// One domain's addresses together with the picks kept for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSelection<'a> {
    pub group: DomainGroup<'a>,
    pub picks: Vec<(&'a EmailAddress, Status)>,
}

impl DomainSelection<'_> {
    /// Output rows for this domain, in ranked order.
    pub fn records(&self) -> impl Iterator<Item = SelectionRecord> + '_ {
        self.picks.iter().map(|&(email, status)| SelectionRecord {
            domain: self.group.domain.to_string(),
            email: email.clone(),
            status,
        })
    }

    pub fn summary(&self) -> DomainSummary {
        DomainSummary {
            domain: self.group.domain.to_string(),
            total: self.group.emails.len(),
            selected: self.picks.len(),
            match_count: self
                .picks
                .iter()
                .filter(|(_, status)| *status == Status::Match)
                .count(),
        }
    }
}

/// Group `emails` once and rank every group.
pub fn select_by_domain<'a>(
    emails: &'a UniqueEmails,
    keywords: &KeywordSet,
) -> Vec<DomainSelection<'a>> {
    group_by_domain(emails)
        .into_iter()
        .map(|group| {
            let picks = rank_group(&group, keywords);
            DomainSelection { group, picks }
        })
        .collect()
}

/// Group, rank and label `emails`, returning the selected records in output order.
#[allow(dead_code)]
pub fn select(emails: &UniqueEmails, keywords: &KeywordSet) -> Vec<SelectionRecord> {
    select_by_domain(emails, keywords)
        .iter()
        .flat_map(|selection| selection.records())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emails(raw: &[&str]) -> UniqueEmails {
        raw.iter().filter_map(|e| EmailAddress::new(e)).collect()
    }

    fn rows(records: &[SelectionRecord]) -> Vec<(&str, &str, Status)> {
        records
            .iter()
            .map(|r| (r.domain.as_str(), r.email.as_str(), r.status))
            .collect()
    }

    #[test]
    fn keyword_hit_leads_then_alphabetical() {
        let input = emails(&["ceo@a.com", "bob@a.com", "alice@a.com"]);
        let records = select(&input, &KeywordSet::parse("ceo"));

        assert_eq!(
            rows(&records),
            [
                ("a.com", "ceo@a.com", Status::Match),
                ("a.com", "alice@a.com", Status::General),
                ("a.com", "bob@a.com", Status::General),
            ]
        );
    }

    #[test]
    fn domains_follow_first_seen_order() {
        let input = emails(&[
            "john.doe@acme.com",
            "ceo@acme.com",
            "info@other.org",
        ]);
        let records = select(&input, &KeywordSet::parse("ceo, founder"));

        assert_eq!(
            rows(&records),
            [
                ("acme.com", "ceo@acme.com", Status::Match),
                ("acme.com", "john.doe@acme.com", Status::General),
                ("other.org", "info@other.org", Status::General),
            ]
        );
    }

    #[test]
    fn six_general_addresses_keep_five_smallest() {
        let input = emails(&[
            "f@d.io", "c@d.io", "e@d.io", "a@d.io", "d@d.io", "b@d.io",
        ]);
        let records = select(&input, &KeywordSet::default());

        let kept: Vec<_> = records.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(kept, ["a@d.io", "b@d.io", "c@d.io", "d@d.io", "e@d.io"]);
        assert!(records.iter().all(|r| r.status == Status::General));
    }

    #[test]
    fn priority_sorts_by_length_with_alphabetical_ties() {
        let input = emails(&[
            "vp.sales@x.com",
            "ceo@x.com",
            "cto@x.com",
            "founder@x.com",
        ]);
        let records = select(&input, &KeywordSet::parse("ceo, cto, founder, vp"));

        let kept: Vec<_> = records.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(
            kept,
            ["ceo@x.com", "cto@x.com", "founder@x.com", "vp.sales@x.com"]
        );
        assert!(records.iter().all(|r| r.status == Status::Match));
    }

    #[test]
    fn keyword_in_domain_only_does_not_match() {
        let input = emails(&["info@ceo.com"]);
        let records = select(&input, &KeywordSet::parse("ceo"));

        assert_eq!(records[0].status, Status::General);
    }

    #[test]
    fn priority_entries_can_fill_every_slot() {
        let input = emails(&[
            "lead1@z.net",
            "lead2@z.net",
            "lead3@z.net",
            "lead4@z.net",
            "lead5@z.net",
            "lead6@z.net",
            "aaa@z.net",
        ]);
        let records = select(&input, &KeywordSet::parse("lead"));

        assert_eq!(records.len(), MAX_PER_DOMAIN);
        assert!(records.iter().all(|r| r.status == Status::Match));
        assert!(records.iter().all(|r| r.email.as_str() != "aaa@z.net"));
    }

    #[test]
    fn cap_holds_per_domain_and_record_domain_matches_email() {
        let mut raw = Vec::new();
        for domain in ["a.com", "b.org"] {
            for i in 0..8 {
                raw.push(format!("user{i}@{domain}"));
            }
        }
        let input: UniqueEmails = raw.iter().filter_map(|e| EmailAddress::new(e)).collect();
        let records = select(&input, &KeywordSet::parse("user1"));

        for domain in ["a.com", "b.org"] {
            let count = records.iter().filter(|r| r.domain == domain).count();
            assert_eq!(count, MAX_PER_DOMAIN);
        }
        assert!(records.iter().all(|r| r.email.domain() == r.domain));
        assert!(records.len() <= input.len());
    }

    #[test]
    fn group_by_domain_partitions_every_address_once() {
        let input = emails(&["a@x.com", "b@y.com", "c@x.com"]);
        let groups = group_by_domain(&input);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].domain, "x.com");
        assert_eq!(groups[0].emails.len(), 2);
        assert_eq!(groups[1].domain, "y.com");
        let total: usize = groups.iter().map(|g| g.emails.len()).sum();
        assert_eq!(total, input.len());
    }

    #[test]
    fn select_by_domain_summaries_count_before_and_after_the_cap() {
        let input = emails(&[
            "a1@q.com", "a2@q.com", "a3@q.com", "a4@q.com", "a5@q.com", "cfo@q.com",
            "vp@q.com", "hi@r.com",
        ]);
        let selections = select_by_domain(&input, &KeywordSet::parse("cfo, vp"));

        let summaries: Vec<_> = selections.iter().map(DomainSelection::summary).collect();
        assert_eq!(summaries[0].domain, "q.com");
        assert_eq!(
            (summaries[0].total, summaries[0].selected, summaries[0].match_count),
            (7, 5, 2)
        );
        assert_eq!(
            (summaries[1].total, summaries[1].selected, summaries[1].match_count),
            (1, 1, 0)
        );
        let flat: Vec<_> = selections
            .iter()
            .flat_map(|selection| selection.records())
            .collect();
        assert_eq!(flat, select(&input, &KeywordSet::parse("cfo, vp")));
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select(&UniqueEmails::new(), &KeywordSet::parse("ceo")).is_empty());
    }
}
