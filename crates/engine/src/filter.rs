//! Keybind filtering by free-text query and category.
//!
//! Responsibilities:
//! - Derive the visible subset of the catalog for the current search box and
//!   selected category.
//!
//! Does NOT handle:
//! - Storing the query or category (owned by the TUI app state).
//!
//! Invariants:
//! - Output preserves catalog order.
//! - Matching is case-insensitive over the description and the space-joined
//!   key labels; an empty query matches everything.
//! - Pure and deterministic; safe to call on every keystroke.

use std::fmt;

use crate::catalog::{Category, Keybind};

/// Category selector with an "All" option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// "All" followed by every category, in sidebar order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Next option in sidebar order, wrapping.
    pub fn cycle_next(self) -> Self {
        let options = Self::options();
        let idx = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(idx + 1) % options.len()]
    }

    /// Previous option in sidebar order, wrapping.
    pub fn cycle_previous(self) -> Self {
        let options = Self::options();
        let idx = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(idx + options.len() - 1) % options.len()]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the keybinds visible for `query` and `category`, in catalog order.
pub fn filter<'a>(catalog: &'a [Keybind], query: &str, category: CategoryFilter) -> Vec<&'a Keybind> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|kb| category.admits(kb.category))
        .filter(|kb| {
            needle.is_empty()
                || kb.description.to_lowercase().contains(&needle)
                || kb.joined_keys().to_lowercase().contains(&needle)
        })
        .collect()
}
