//! Query/filter engine for in-memory collections.
//!
//! Filtering is a pure function evaluated eagerly on every call; nothing is
//! cached or incremental. The predicate combines a case-insensitive
//! substring match over two designated text fields with an exact categorical
//! filter, joined by logical AND. The `"all"` sentinel switches the
//! categorical filter off, and an empty search term matches everything.

use crate::domain::{Product, User};

/// Categorical filter with the `"all"` sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match every entity
    All,
    /// Match entities whose label equals the value exactly
    Only(String),
}

impl Selector {
    /// Parse a selector value; `"all"` means match everything
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }

    fn matches(&self, label: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(value) => value == label,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::All
    }
}

/// Search term plus categorical filter
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub term: String,
    pub selector: Selector,
}

impl Query {
    pub fn new(term: impl Into<String>, selector: Selector) -> Self {
        Self {
            term: term.into(),
            selector,
        }
    }

    /// Check a single entity against this query
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        let term = self.term.to_lowercase();
        let in_text = item
            .haystacks()
            .iter()
            .any(|field| field.to_lowercase().contains(&term));

        in_text && self.selector.matches(item.label())
    }
}

/// Entities expose two searchable text fields and one categorical label
pub trait Searchable {
    fn haystacks(&self) -> [&str; 2];
    fn label(&self) -> &str;
}

impl Searchable for Product {
    fn haystacks(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }

    fn label(&self) -> &str {
        &self.category
    }
}

impl Searchable for User {
    fn haystacks(&self) -> [&str; 2] {
        [&self.name, &self.email]
    }

    fn label(&self) -> &str {
        self.role.as_str()
    }
}

/// Apply a query to a collection, preserving input order
pub fn filter<T: Searchable + Clone>(items: &[T], query: &Query) -> Vec<T> {
    items.iter().filter(|item| query.matches(*item)).cloned().collect()
}
