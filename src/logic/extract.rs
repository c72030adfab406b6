// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Regex-based email extraction from free-form text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::email::{EmailAddress, UniqueEmails};

/// Local part, `@`, domain labels, then a dot and an alphabetic TLD of two or more letters.
const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Find every address in `text`, lowercased and deduplicated.
///
/// Matches are non-overlapping and taken left to right; the returned set
/// iterates in order of each address's first occurrence. Text without any
/// match yields an empty set.
pub fn extract(text: &str) -> UniqueEmails {
    let mut emails = UniqueEmails::new();
    for found in RE_EMAIL.find_iter(text) {
        // The pattern admits a single `@`, so construction only fails on a broken invariant.
        if let Some(email) = EmailAddress::new(found.as_str()) {
            emails.insert(email);
        }
    }
    tracing::debug!(unique = emails.len(), "extracted email addresses");
    emails
}
