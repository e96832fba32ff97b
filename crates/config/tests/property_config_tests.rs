//! Property-based tests for the theme registry and page navigation.
//!
//! # Invariants
//! - Cycling a theme forward N times then back N times returns to the start.
//! - Cycling forward `THEMES.len()` times is the identity.
//! - Page next/previous never leave the page list.

use omarchy_config::{ActiveTheme, Page, THEMES};
use proptest::prelude::*;

fn theme_strategy() -> impl Strategy<Value = ActiveTheme> {
    (0..THEMES.len()).prop_map(|i| {
        let mut theme = ActiveTheme::default();
        theme.select_index(i);
        theme
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_theme_cycle_roundtrip(start in theme_strategy(), steps in 0usize..50) {
        let mut theme = start;
        for _ in 0..steps {
            theme = theme.cycle_next();
        }
        for _ in 0..steps {
            theme = theme.cycle_previous();
        }
        prop_assert_eq!(theme, start);
    }

    #[test]
    fn test_theme_full_cycle_is_identity(start in theme_strategy()) {
        let mut theme = start;
        for _ in 0..THEMES.len() {
            theme = theme.cycle_next();
        }
        prop_assert_eq!(theme, start);
    }

    #[test]
    fn test_unknown_names_never_change_theme(start in theme_strategy(), name in "[a-z]{1,12}x[0-9]") {
        let mut theme = start;
        prop_assert!(!theme.select(&name));
        prop_assert_eq!(theme, start);
    }

    #[test]
    fn test_page_steps_stay_in_range(moves in prop::collection::vec(any::<bool>(), 0..30)) {
        let mut page = Page::default();
        for forward in moves {
            page = if forward { page.next() } else { page.previous() };
            prop_assert!(Page::ALL.contains(&page));
        }
    }
}
