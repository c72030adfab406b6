// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Role keyword collection used to prioritize addresses during selection.

/// Keywords applied when the user does not provide their own list.
pub const DEFAULT_KEYWORDS: &str = "ceo, founder, cto, cfo, president, director, lead, manager, vp";

/// Ordered, normalized role keywords.
///
/// Every entry is trimmed, lowercased and non-empty. Duplicates are kept; they
/// only cost a redundant substring check during matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    items: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = items
            .into_iter()
            .map(|kw| kw.as_ref().trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .collect();
        Self { items }
    }

    /// Split comma-separated user input into a keyword set.
    ///
    /// ```rust,ignore
    /// let kw = KeywordSet::parse(" CEO, ,founder ");
    /// assert_eq!(kw.items(), ["ceo", "founder"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `keyword` is already an entry. Expects a normalized keyword.
    pub fn contains(&self, keyword: &str) -> bool {
        self.items.iter().any(|kw| kw == keyword)
    }

    /// Copy of the set with repeated entries dropped; the first occurrence wins.
    pub fn deduplicated(&self) -> Self {
        let mut unique = Self::default();
        unique.extend_unique(self.items.iter().cloned());
        unique
    }

    /// Append entries that are not present yet and return the ones that were.
    pub fn extend_unique<I>(&mut self, keywords: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut repeated = Vec::new();
        for kw in keywords {
            if self.contains(&kw) {
                repeated.push(kw);
            } else {
                self.items.push(kw);
            }
        }
        repeated
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Overwrite the entry at `index`; out-of-range indices are ignored.
    pub fn replace(&mut self, index: usize, keyword: String) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = keyword;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether any keyword occurs inside `local_part`, ignoring case.
    pub fn matches(&self, local_part: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let haystack = local_part.to_lowercase();
        self.items.iter().any(|kw| haystack.contains(kw.as_str()))
    }
}
