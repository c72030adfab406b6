// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Normalized email addresses and the insertion-ordered set the extractor yields.

use std::collections::HashSet;
use std::fmt;

/// Lowercased address holding exactly one `@`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize `raw` to lowercase; returns `None` unless it has exactly one `@`
    /// with text on both sides.
    pub fn new(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_lowercase();
        let (local, domain) = lower.split_once('@')?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return None;
        }
        Some(Self(lower))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into `(local_part, domain)` at the first `@`.
    pub fn split(&self) -> Option<(&str, &str)> {
        self.0.split_once('@')
    }

    pub fn local_part(&self) -> &str {
        self.split().map(|(local, _)| local).unwrap_or(&self.0)
    }

    pub fn domain(&self) -> &str {
        self.split().map(|(_, domain)| domain).unwrap_or_default()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Set of unique addresses that remembers first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniqueEmails {
    order: Vec<EmailAddress>,
    seen: HashSet<EmailAddress>,
}

impl UniqueEmails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an address; returns `false` when it was already present.
    pub fn insert(&mut self, email: EmailAddress) -> bool {
        if self.contains(&email) {
            return false;
        }
        self.seen.insert(email.clone());
        self.order.push(email);
        true
    }

    pub fn contains(&self, email: &EmailAddress) -> bool {
        self.seen.contains(email)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmailAddress> {
        self.order.iter()
    }
}

impl FromIterator<EmailAddress> for UniqueEmails {
    fn from_iter<T: IntoIterator<Item = EmailAddress>>(iter: T) -> Self {
        let mut set = Self::new();
        for email in iter {
            set.insert(email);
        }
        set
    }
}

impl<'a> IntoIterator for &'a UniqueEmails {
    type Item = &'a EmailAddress;
    type IntoIter = std::slice::Iter<'a, EmailAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases_and_splits() {
        let email = EmailAddress::new("John.Doe@ACME.com").expect("valid");
        assert_eq!(email.as_str(), "john.doe@acme.com");
        assert_eq!(email.local_part(), "john.doe");
        assert_eq!(email.domain(), "acme.com");
    }

    #[test]
    fn new_rejects_missing_or_repeated_at() {
        assert!(EmailAddress::new("no-at-sign.com").is_none());
        assert!(EmailAddress::new("a@b@c.com").is_none());
        assert!(EmailAddress::new("@acme.com").is_none());
        assert!(EmailAddress::new("bob@").is_none());
    }

    #[test]
    fn unique_emails_dedups_and_keeps_first_seen_order() {
        let emails: UniqueEmails = ["b@x.com", "a@x.com", "B@X.com"]
            .into_iter()
            .filter_map(EmailAddress::new)
            .collect();

        let listed: Vec<_> = emails.iter().map(EmailAddress::as_str).collect();
        assert_eq!(listed, ["b@x.com", "a@x.com"]);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = UniqueEmails::new();
        let email = EmailAddress::new("a@x.com").unwrap();
        assert!(set.insert(email.clone()));
        assert!(!set.insert(email.clone()));
        assert!(set.contains(&email));
        assert_eq!(set.len(), 1);
    }
}
