//! Command-line argument parsing for omarchy-manual.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration resolution or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - Environment variable parsing (handled by `omarchy_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Values are passed through as strings; the config loader validates them.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for omarchy-manual.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --page)
/// 2. Environment variables (e.g., OMARCHY_MANUAL_THEME)
/// 3. `.env` file in the working directory
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "omarchy-manual",
    about = "Interactive terminal manual for the Omarchy desktop",
    version,
    after_help = "Examples:\n  omarchy-manual\n  omarchy-manual --theme \"Tokyo Night\" --page themes\n  omarchy-manual --skip-intro --page navigation --engaged\n  omarchy-manual --log-dir /tmp/omarchy-manual --no-mouse\n"
)]
pub struct Cli {
    /// Theme to start with (e.g. "Gruvbox", "Tokyo Night")
    #[arg(long, short = 't')]
    pub theme: Option<String>,

    /// Page to open: getting-started, navigation, themes, or hotkeys
    #[arg(long, short = 'p')]
    pub page: Option<String>,

    /// How long simulator hints stay visible, in milliseconds
    #[arg(long)]
    pub hint_ttl_ms: Option<u64>,

    /// Go straight to the manual without the splash screen
    #[arg(long)]
    pub skip_intro: bool,

    /// Start with the workspace simulator capturing the keyboard
    #[arg(long)]
    pub engaged: bool,

    /// Start the simulator with no windows open
    #[arg(long)]
    pub empty_session: bool,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["omarchy-manual"]);
        assert!(cli.theme.is_none());
        assert!(cli.page.is_none());
        assert!(cli.hint_ttl_ms.is_none());
        assert!(!cli.skip_intro);
        assert!(!cli.engaged);
        assert!(!cli.empty_session);
        assert!(!cli.no_mouse);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_theme_and_page_flags() {
        let cli = Cli::parse_from(["omarchy-manual", "-t", "Nord", "--page", "themes"]);
        assert_eq!(cli.theme.as_deref(), Some("Nord"));
        assert_eq!(cli.page.as_deref(), Some("themes"));
    }

    #[test]
    fn test_hint_ttl_must_be_numeric() {
        assert!(Cli::try_parse_from(["omarchy-manual", "--hint-ttl-ms", "soon"]).is_err());
        let cli = Cli::parse_from(["omarchy-manual", "--hint-ttl-ms", "500"]);
        assert_eq!(cli.hint_ttl_ms, Some(500));
    }

    #[test]
    fn test_session_flags() {
        let cli = Cli::parse_from([
            "omarchy-manual",
            "--skip-intro",
            "--engaged",
            "--empty-session",
            "--no-mouse",
        ]);
        assert!(cli.skip_intro);
        assert!(cli.engaged);
        assert!(cli.empty_session);
        assert!(cli.no_mouse);
    }
}
