//! Help popup rendering from centralized keybindings.
//!
//! Responsibilities:
//! - Convert keybinding metadata into a human-readable help string.
//!
//! Does NOT handle:
//! - Mutating application state.
//! - Owning keybinding definitions (delegated to keymap).
//!
//! Invariants:
//! - Rendering order is stable across runs.
//! - Bindings sharing keys and description are listed once.

use std::collections::BTreeSet;

use crate::input::keymap::{Section, keybindings, sections_in_order};

pub(crate) fn help_text() -> String {
    let mut out = String::new();
    for &section in sections_in_order() {
        let entries = unique_entries(section);
        if entries.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(section_title(section));
        out.push('\n');
        let max_key_len = entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in entries {
            let padding = max_key_len.saturating_sub(keys.chars().count()) + 2;
            out.push_str("  ");
            out.push_str(keys);
            out.push_str(&" ".repeat(padding));
            out.push_str(description);
            out.push('\n');
        }
    }
    out
}

fn unique_entries(section: Section) -> Vec<(&'static str, &'static str)> {
    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();
    for binding in keybindings() {
        if binding.section != section {
            continue;
        }
        let key = (binding.keys, binding.description);
        if seen.insert(key) {
            entries.push(key);
        }
    }
    entries
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Global => "Global Keys:",
        Section::Navigation => "Navigation Page:",
        Section::Search => "Search Box:",
        Section::Simulator => "Workspace Simulator (engaged):",
        Section::Themes => "Themes Page:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_appear_in_order() {
        let text = help_text();
        let positions: Vec<_> = [
            "Global Keys:",
            "Navigation Page:",
            "Search Box:",
            "Workspace Simulator (engaged):",
            "Themes Page:",
        ]
        .iter()
        .map(|title| text.find(title).expect("section title present"))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn duplicate_bindings_are_listed_once() {
        let text = help_text();
        assert_eq!(text.matches("Jump to page").count(), 1);
        assert_eq!(text.matches("Scroll down").count(), 1);
    }

    #[test]
    fn keys_are_padded_into_a_column() {
        let text = help_text();
        assert!(text.contains("  Tab        Next page"));
        assert!(text.contains("  Super+Enter"));
    }
}
