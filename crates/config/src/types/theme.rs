//! Theme registry for the Omarchy manual.
//!
//! Responsibilities:
//! - Define the nine-role color `Palette` and the named `ThemeDef`.
//! - Provide the static `THEMES` registry in gallery order.
//! - Track which theme is active (`ActiveTheme`) and move between themes.
//!
//! Does NOT handle:
//! - Turning palette roles into widget styles (see the TUI `ThemeExt`).
//! - Deciding which theme to start with (see `loader`).
//!
//! Invariants:
//! - Exactly one theme is active at a time.
//! - Theme names are unique, compared case-insensitively.
//! - Selecting an unknown name leaves the active theme unchanged.

use ratatui::style::Color;
use std::fmt;

/// The nine color roles every theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub purple: Color,
    pub gray: Color,
    /// Raised surface color (cards, panels, status bars).
    pub dark: Color,
}

/// A named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDef {
    pub name: &'static str,
    pub palette: Palette,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

/// All themes, in gallery order.
pub static THEMES: &[ThemeDef] = &[
    ThemeDef {
        name: "Gruvbox",
        palette: Palette {
            bg: rgb(17, 17, 17),
            fg: rgb(235, 219, 178),
            accent: rgb(69, 133, 136),
            green: rgb(152, 151, 26),
            red: rgb(204, 36, 29),
            yellow: rgb(215, 153, 33),
            purple: rgb(177, 98, 134),
            gray: rgb(146, 131, 116),
            dark: rgb(40, 40, 40),
        },
    },
    ThemeDef {
        name: "Cappuchin",
        palette: Palette {
            bg: rgb(30, 30, 46),
            fg: rgb(205, 214, 244),
            accent: rgb(137, 180, 250),
            green: rgb(166, 227, 161),
            red: rgb(243, 139, 168),
            yellow: rgb(249, 226, 175),
            purple: rgb(203, 166, 247),
            gray: rgb(147, 153, 178),
            dark: rgb(24, 24, 37),
        },
    },
    ThemeDef {
        name: "Catppuccin Latte",
        palette: Palette {
            bg: rgb(239, 241, 245),
            fg: rgb(76, 79, 105),
            accent: rgb(30, 102, 245),
            green: rgb(64, 160, 43),
            red: rgb(210, 15, 57),
            yellow: rgb(223, 142, 29),
            purple: rgb(136, 57, 239),
            gray: rgb(172, 176, 190),
            dark: rgb(230, 233, 239),
        },
    },
    ThemeDef {
        name: "Everforest",
        palette: Palette {
            bg: rgb(43, 51, 57),
            fg: rgb(211, 198, 170),
            accent: rgb(167, 192, 128),
            green: rgb(167, 192, 128),
            red: rgb(230, 126, 128),
            yellow: rgb(219, 188, 127),
            purple: rgb(214, 153, 182),
            gray: rgb(133, 146, 137),
            dark: rgb(50, 60, 65),
        },
    },
    ThemeDef {
        name: "Hackerman",
        palette: Palette {
            bg: rgb(0, 0, 0),
            fg: rgb(0, 255, 0),
            accent: rgb(0, 255, 0),
            green: rgb(0, 255, 0),
            red: rgb(255, 0, 0),
            yellow: rgb(255, 255, 0),
            purple: rgb(255, 0, 255),
            gray: rgb(85, 85, 85),
            dark: rgb(20, 20, 20),
        },
    },
    ThemeDef {
        name: "Osaka Jade",
        palette: Palette {
            bg: rgb(21, 21, 21),
            fg: rgb(224, 224, 224),
            accent: rgb(0, 255, 170),
            green: rgb(0, 255, 170),
            red: rgb(255, 85, 85),
            yellow: rgb(255, 204, 85),
            purple: rgb(189, 147, 249),
            gray: rgb(80, 80, 80),
            dark: rgb(40, 40, 40),
        },
    },
    ThemeDef {
        name: "Tokyo Night",
        palette: Palette {
            bg: rgb(26, 27, 38),
            fg: rgb(192, 202, 245),
            accent: rgb(122, 162, 247),
            green: rgb(158, 206, 106),
            red: rgb(247, 118, 142),
            yellow: rgb(224, 175, 104),
            purple: rgb(187, 154, 247),
            gray: rgb(86, 95, 137),
            dark: rgb(22, 22, 30),
        },
    },
    ThemeDef {
        name: "Kanagawa",
        palette: Palette {
            bg: rgb(31, 31, 40),
            fg: rgb(220, 215, 186),
            accent: rgb(126, 156, 216),
            green: rgb(118, 148, 106),
            red: rgb(200, 64, 83),
            yellow: rgb(255, 158, 59),
            purple: rgb(149, 127, 184),
            gray: rgb(114, 113, 105),
            dark: rgb(22, 22, 29),
        },
    },
    ThemeDef {
        name: "Nord",
        palette: Palette {
            bg: rgb(46, 52, 64),
            fg: rgb(216, 222, 233),
            accent: rgb(136, 192, 208),
            green: rgb(163, 190, 140),
            red: rgb(191, 97, 106),
            yellow: rgb(235, 203, 139),
            purple: rgb(180, 142, 173),
            gray: rgb(76, 86, 106),
            dark: rgb(59, 66, 82),
        },
    },
    ThemeDef {
        name: "Rose Pine",
        palette: Palette {
            bg: rgb(25, 23, 36),
            fg: rgb(224, 222, 244),
            accent: rgb(196, 167, 231),
            green: rgb(156, 207, 216), // foam
            red: rgb(235, 111, 146),
            yellow: rgb(246, 193, 119),
            purple: rgb(196, 167, 231),
            gray: rgb(110, 106, 134),
            dark: rgb(31, 29, 46),
        },
    },
    ThemeDef {
        name: "Matte Black",
        palette: Palette {
            bg: rgb(10, 10, 10),
            fg: rgb(240, 240, 240),
            accent: rgb(80, 80, 80),
            green: rgb(240, 240, 240),
            red: rgb(180, 0, 0),
            yellow: rgb(255, 255, 0),
            purple: rgb(100, 100, 100),
            gray: rgb(60, 60, 60),
            dark: rgb(20, 20, 20),
        },
    },
    ThemeDef {
        name: "Flexoki Light",
        palette: Palette {
            bg: rgb(255, 252, 240),
            fg: rgb(16, 15, 15),
            accent: rgb(32, 94, 166),
            green: rgb(102, 128, 11),
            red: rgb(175, 48, 41),
            yellow: rgb(173, 131, 1),
            purple: rgb(94, 64, 157),
            gray: rgb(135, 133, 128),
            dark: rgb(242, 240, 229),
        },
    },
    ThemeDef {
        name: "Ristretto",
        palette: Palette {
            bg: rgb(44, 37, 37),
            fg: rgb(253, 246, 227),
            accent: rgb(189, 147, 249),
            green: rgb(166, 226, 46),
            red: rgb(255, 85, 85),
            yellow: rgb(241, 250, 140),
            purple: rgb(189, 147, 249),
            gray: rgb(114, 105, 106),
            dark: rgb(61, 53, 53),
        },
    },
    ThemeDef {
        name: "Ethereal",
        palette: Palette {
            bg: rgb(20, 15, 25),
            fg: rgb(240, 230, 250),
            accent: rgb(220, 100, 250),
            green: rgb(100, 240, 180),
            red: rgb(250, 80, 100),
            yellow: rgb(250, 220, 100),
            purple: rgb(180, 80, 250),
            gray: rgb(100, 80, 110),
            dark: rgb(35, 25, 45),
        },
    },
];

/// Looks up a theme by name, ignoring ASCII case and surrounding whitespace.
pub fn find_theme(name: &str) -> Option<&'static ThemeDef> {
    let wanted = name.trim();
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(wanted))
}

/// The currently applied theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTheme {
    index: usize,
}

impl Default for ActiveTheme {
    fn default() -> Self {
        Self::from_name(crate::constants::DEFAULT_THEME).unwrap_or(Self { index: 0 })
    }
}

impl ActiveTheme {
    /// Active theme for `name`, or `None` if no such theme exists.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        THEMES
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(wanted))
            .map(|index| Self { index })
    }

    /// Switches to `name`. Unknown names are ignored and return `false`.
    pub fn select(&mut self, name: &str) -> bool {
        match Self::from_name(name) {
            Some(next) => {
                if next != *self {
                    tracing::debug!(from = self.name(), to = next.name(), "Theme changed");
                }
                *self = next;
                true
            }
            None => {
                tracing::debug!(name, "Ignoring unknown theme name");
                false
            }
        }
    }

    /// Switches to the theme at `index` in gallery order. Out-of-range
    /// indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < THEMES.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Next theme in gallery order, wrapping.
    pub fn cycle_next(self) -> Self {
        Self {
            index: (self.index + 1) % THEMES.len(),
        }
    }

    /// Previous theme in gallery order, wrapping.
    pub fn cycle_previous(self) -> Self {
        Self {
            index: (self.index + THEMES.len() - 1) % THEMES.len(),
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn def(self) -> &'static ThemeDef {
        &THEMES[self.index]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn palette(self) -> Palette {
        self.def().palette
    }
}

impl fmt::Display for ActiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_fourteen_unique_themes() {
        assert_eq!(THEMES.len(), 14);
        let names: HashSet<_> = THEMES.iter().map(|t| t.name.to_lowercase()).collect();
        assert_eq!(names.len(), THEMES.len());
    }

    #[test]
    fn default_is_gruvbox() {
        let theme = ActiveTheme::default();
        assert_eq!(theme.name(), "Gruvbox");
        assert_eq!(theme.palette().bg, Color::Rgb(17, 17, 17));
        assert_eq!(theme.palette().accent, Color::Rgb(69, 133, 136));
    }

    #[test]
    fn select_known_theme() {
        let mut theme = ActiveTheme::default();
        assert!(theme.select("Nord"));
        assert_eq!(theme.name(), "Nord");
        assert_eq!(theme.palette().fg, Color::Rgb(216, 222, 233));
    }

    #[test]
    fn select_is_case_insensitive() {
        let mut theme = ActiveTheme::default();
        assert!(theme.select("tokyo night"));
        assert_eq!(theme.name(), "Tokyo Night");
    }

    #[test]
    fn unknown_theme_is_ignored() {
        let mut theme = ActiveTheme::default();
        theme.select("Kanagawa");
        assert!(!theme.select("Solarized"));
        assert_eq!(theme.name(), "Kanagawa");
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let first = ActiveTheme::from_name("Gruvbox").unwrap();
        let last = ActiveTheme::from_name("Ethereal").unwrap();
        assert_eq!(first.cycle_previous(), last);
        assert_eq!(last.cycle_next(), first);
        assert_eq!(first.cycle_next().name(), "Cappuchin");
    }

    #[test]
    fn select_index_bounds() {
        let mut theme = ActiveTheme::default();
        assert!(theme.select_index(2));
        assert_eq!(theme.name(), "Catppuccin Latte");
        assert!(!theme.select_index(THEMES.len()));
        assert_eq!(theme.index(), 2);
    }

    #[test]
    fn find_theme_trims() {
        assert_eq!(find_theme("  rose pine ").map(|t| t.name), Some("Rose Pine"));
        assert!(find_theme("").is_none());
    }
}
