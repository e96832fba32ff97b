//! Simulated application windows.
//!
//! Responsibilities:
//! - Define the closed set of window kinds and their display titles.
//! - Define the window record and its identifier.
//!
//! Does NOT handle:
//! - Window ordering, focus, or capacity (see `workspace`).
//!
//! Invariants:
//! - A window's kind and title never change after creation.
//! - `title` is always `kind.title()`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Identifier of a simulated window, unique within one simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of application a simulated window stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Terminal,
    Browser,
    FileManager,
    Monitor,
}

impl WindowKind {
    /// All kinds, in launcher order.
    pub const ALL: [WindowKind; 4] = [
        WindowKind::Terminal,
        WindowKind::Browser,
        WindowKind::FileManager,
        WindowKind::Monitor,
    ];

    /// Title shown in the window header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "Alacritty",
            Self::Browser => "Firefox",
            Self::FileManager => "Thunar",
            Self::Monitor => "Btop",
        }
    }

    /// Short machine name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Browser => "browser",
            Self::FileManager => "files",
            Self::Monitor => "monitor",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "term" => Ok(Self::Terminal),
            "browser" => Ok(Self::Browser),
            "files" | "file-manager" | "file_manager" => Ok(Self::FileManager),
            "monitor" => Ok(Self::Monitor),
            _ => Err(ParseError::UnknownWindowKind(s.to_string())),
        }
    }
}

/// A simulated window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: &'static str,
}

impl Window {
    pub(crate) fn new(id: WindowId, kind: WindowKind) -> Self {
        Self {
            id,
            kind,
            title: kind.title(),
        }
    }
}
