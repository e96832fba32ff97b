//! Configuration resolution for the TUI.
//!
//! Responsibilities:
//! - Resolve startup settings with CLI and environment variable overrides.
//! - Build the initial `App` from resolved settings and session flags.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//! - Validation rules (owned by `omarchy_config::ConfigLoader`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - `load_dotenv()` is called before environment variables are read.

use omarchy_config::{ConfigError, ConfigLoader, ManualConfig};

use crate::app::App;
use crate::cli::Cli;

/// Resolves the manual's settings for this run.
pub fn resolve_config(cli: &Cli) -> Result<ManualConfig, ConfigError> {
    let mut loader = ConfigLoader::new().load_dotenv()?.from_env()?;

    if let Some(theme) = &cli.theme {
        loader = loader.with_theme(theme.clone());
    }
    if let Some(page) = &cli.page {
        loader = loader.with_page(page.clone());
    }
    if let Some(ms) = cli.hint_ttl_ms {
        loader = loader.with_hint_ttl_ms(ms);
    }
    if cli.skip_intro {
        loader = loader.with_skip_intro(true);
    }

    loader.build()
}

/// Builds the app for this run, applying the session flags.
pub fn build_app(cli: &Cli, config: ManualConfig) -> App {
    tracing::info!(
        theme = config.theme.name(),
        page = %config.start_page,
        hint_ttl_ms = config.hint_ttl.as_millis() as u64,
        "Resolved configuration"
    );

    let mut app = App::new(config);
    if cli.empty_session {
        app = app.with_empty_session();
    }
    if cli.engaged {
        app.simulator.engage();
    }
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use omarchy_config::Page;
    use serial_test::serial;
    use std::time::Duration;

    const CLEARED: [(&str, Option<&str>); 5] = [
        ("DOTENV_DISABLED", Some("1")),
        ("OMARCHY_MANUAL_THEME", None),
        ("OMARCHY_MANUAL_PAGE", None),
        ("OMARCHY_MANUAL_HINT_TTL_MS", None),
        ("OMARCHY_MANUAL_SKIP_INTRO", None),
    ];

    #[test]
    #[serial]
    fn defaults_without_flags_or_env() {
        temp_env::with_vars(CLEARED, || {
            let cli = Cli::parse_from(["omarchy-manual"]);
            let config = resolve_config(&cli).unwrap();
            assert_eq!(config.theme.name(), "Gruvbox");
            assert_eq!(config.start_page, Page::GettingStarted);
            assert!(!config.skip_intro);
        });
    }

    #[test]
    #[serial]
    fn cli_overrides_environment() {
        temp_env::with_vars(CLEARED, || {
            temp_env::with_vars(
                [
                    ("OMARCHY_MANUAL_THEME", Some("Nord")),
                    ("OMARCHY_MANUAL_PAGE", Some("hotkeys")),
                ],
                || {
                    let cli = Cli::parse_from(["omarchy-manual", "--theme", "Everforest"]);
                    let config = resolve_config(&cli).unwrap();
                    assert_eq!(config.theme.name(), "Everforest");
                    assert_eq!(config.start_page, Page::Hotkeys);
                },
            );
        });
    }

    #[test]
    #[serial]
    fn unknown_theme_is_rejected() {
        temp_env::with_vars(CLEARED, || {
            let cli = Cli::parse_from(["omarchy-manual", "--theme", "Solarized Plaid"]);
            assert!(resolve_config(&cli).is_err());
        });
    }

    #[test]
    fn session_flags_shape_the_app() {
        let cli = Cli::parse_from(["omarchy-manual", "--engaged", "--empty-session"]);
        let config = ManualConfig {
            hint_ttl: Duration::from_millis(300),
            ..ManualConfig::default()
        };
        let app = build_app(&cli, config);
        assert!(app.simulator.is_engaged());
        assert!(app.simulator.state().is_empty());
        assert_eq!(app.hint_ttl, Duration::from_millis(300));
    }
}
