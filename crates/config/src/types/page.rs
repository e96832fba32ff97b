//! Manual pages.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// A page of the manual, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    GettingStarted,
    Navigation,
    Themes,
    Hotkeys,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::GettingStarted,
        Page::Navigation,
        Page::Themes,
        Page::Hotkeys,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Navigation => "Navigation",
            Self::Themes => "Themes",
            Self::Hotkeys => "Hotkeys",
        }
    }

    /// Kebab-case name accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::GettingStarted => "getting-started",
            Self::Navigation => "navigation",
            Self::Themes => "themes",
            Self::Hotkeys => "hotkeys",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::GettingStarted => 0,
            Self::Navigation => 1,
            Self::Themes => 2,
            Self::Hotkeys => 3,
        }
    }

    /// Page at a zero-based position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following page; the last page stays put.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Preceding page; the first page stays put.
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = ConfigError;

    /// Accepts the title, the slug, or a 1-based page number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(n) = wanted.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| ConfigError::UnknownPage(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|p| p.title().eq_ignore_ascii_case(wanted) || p.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_clamp() {
        assert_eq!(Page::GettingStarted.previous(), Page::GettingStarted);
        assert_eq!(Page::GettingStarted.next(), Page::Navigation);
        assert_eq!(Page::Hotkeys.next(), Page::Hotkeys);
        assert_eq!(Page::Hotkeys.previous(), Page::Themes);
    }

    #[test]
    fn parses_title_slug_and_number() {
        assert_eq!("Getting Started".parse::<Page>().unwrap(), Page::GettingStarted);
        assert_eq!("getting-started".parse::<Page>().unwrap(), Page::GettingStarted);
        assert_eq!("THEMES".parse::<Page>().unwrap(), Page::Themes);
        assert_eq!("4".parse::<Page>().unwrap(), Page::Hotkeys);
    }

    #[test]
    fn rejects_unknown_pages() {
        assert!(matches!("0".parse::<Page>(), Err(ConfigError::UnknownPage(_))));
        assert!(matches!("5".parse::<Page>(), Err(ConfigError::UnknownPage(_))));
        assert!(matches!("settings".parse::<Page>(), Err(ConfigError::UnknownPage(p)) if p == "settings"));
    }
}
