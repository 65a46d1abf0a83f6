//! Facet filtering over the content store.
//!
//! A [`FilterState`] combines four predicates with logical AND: free text,
//! category, difficulty and language. Filtering never reorders; the result
//! keeps the store's insertion order.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Difficulty, KnowledgeItem, Language};

/// A facet selection: either no restriction or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq + Copy> Facet<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// Whether `value` passes this facet.
    pub fn admits(&self, value: T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => *wanted == value,
        }
    }

    pub fn value(&self) -> Option<T> {
        match self {
            Facet::All => None,
            Facet::Only(v) => Some(*v),
        }
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Facet::All, Facet::Only)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facet::All => f.write_str("all"),
            Facet::Only(v) => write!(f, "{v}"),
        }
    }
}

impl<T> std::str::FromStr for Facet<T>
where
    T: std::str::FromStr<Err = anyhow::Error>,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Facet::All)
        } else {
            s.parse().map(Facet::Only)
        }
    }
}

/// Transient filter selections of the knowledge view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: Facet<Category>,
    pub difficulty: Facet<Difficulty>,
    pub language: Facet<Language>,
}

impl FilterState {
    /// True when any facet narrows the store.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || !self.category.is_all()
            || !self.difficulty.is_all()
            || !self.language.is_all()
    }

    pub fn matches(&self, item: &KnowledgeItem) -> bool {
        self.matches_with(item, &self.query.to_lowercase())
    }

    /// Every predicate, with the query already lowercased.
    fn matches_with(&self, item: &KnowledgeItem, needle: &str) -> bool {
        matches_lowered(item, needle)
            && self.category.admits(item.category)
            && self.difficulty.admits(item.difficulty)
            && matches_language(item.language, self.language)
    }

    /// Items passing every predicate, in input order.
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a KnowledgeItem>
    where
        I: IntoIterator<Item = &'a KnowledgeItem>,
    {
        let needle = self.query.to_lowercase();
        let result: Vec<_> = items
            .into_iter()
            .filter(|item| self.matches_with(item, &needle))
            .collect();
        tracing::debug!(filters = ?self, hits = result.len(), "applied filters");
        result
    }
}

/// Case-insensitive substring match on title, description or any tag.
/// An empty query matches everything.
pub fn matches_text(item: &KnowledgeItem, query: &str) -> bool {
    matches_lowered(item, &query.to_lowercase())
}

fn matches_lowered(item: &KnowledgeItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Language predicate: `Both` items satisfy any specific language filter,
/// language-agnostic items satisfy only `All`.
pub fn matches_language(item_language: Option<Language>, facet: Facet<Language>) -> bool {
    match (facet, item_language) {
        (Facet::All, _) => true,
        (Facet::Only(_), None) => false,
        (Facet::Only(wanted), Some(lang)) => lang == wanted || lang == Language::Both,
    }
}
