//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable parsing for each setting.
//! - Test handling of empty and whitespace-only environment variables.
//! - Test builder (CLI) precedence over the environment.

use std::time::Duration;

use serial_test::serial;

use super::{env_lock, vars_with};
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::Page;

#[test]
#[serial]
fn test_defaults_without_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(vars_with(&[]), || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert_eq!(config.theme.name(), "Gruvbox");
        assert_eq!(config.start_page, Page::GettingStarted);
        assert_eq!(config.hint_ttl, Duration::from_millis(2000));
        assert!(!config.skip_intro);
    });
}

#[test]
#[serial]
fn test_env_sets_every_field() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        vars_with(&[
            ("OMARCHY_MANUAL_THEME", "Nord"),
            ("OMARCHY_MANUAL_PAGE", "navigation"),
            ("OMARCHY_MANUAL_HINT_TTL_MS", "500"),
            ("OMARCHY_MANUAL_SKIP_INTRO", "1"),
        ]),
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.theme.name(), "Nord");
            assert_eq!(config.start_page, Page::Navigation);
            assert_eq!(config.hint_ttl, Duration::from_millis(500));
            assert!(config.skip_intro);
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        vars_with(&[
            ("OMARCHY_MANUAL_THEME", "Nord"),
            ("OMARCHY_MANUAL_HINT_TTL_MS", "500"),
        ]),
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_theme("Ristretto".to_string())
                .with_hint_ttl_ms(3000)
                .build()
                .unwrap();
            assert_eq!(config.theme.name(), "Ristretto");
            assert_eq!(config.hint_ttl, Duration::from_millis(3000));
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        vars_with(&[
            ("OMARCHY_MANUAL_THEME", ""),
            ("OMARCHY_MANUAL_PAGE", "   "),
        ]),
        || {
            let loader = ConfigLoader::new().from_env().unwrap();
            assert!(loader.theme().is_none());
            assert!(loader.page().is_none());
        },
    );
}

#[test]
#[serial]
fn test_env_values_are_trimmed() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(vars_with(&[("OMARCHY_MANUAL_THEME", "  Tokyo Night  ")]), || {
        assert_eq!(
            env_var_or_none("OMARCHY_MANUAL_THEME").as_deref(),
            Some("Tokyo Night")
        );
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert_eq!(config.theme.name(), "Tokyo Night");
    });
}

#[test]
#[serial]
fn test_non_numeric_ttl_is_invalid_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(vars_with(&[("OMARCHY_MANUAL_HINT_TTL_MS", "soon")]), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, .. } => {
                assert_eq!(var, "OMARCHY_MANUAL_HINT_TTL_MS")
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_skip_intro_accepts_words() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(vars_with(&[("OMARCHY_MANUAL_SKIP_INTRO", "Yes")]), || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert!(config.skip_intro);
    });

    temp_env::with_vars(vars_with(&[("OMARCHY_MANUAL_SKIP_INTRO", "maybe")]), || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}
