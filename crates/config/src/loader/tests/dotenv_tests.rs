//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without leaking contents.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests must serialize mutations to process-global state (cwd/env).

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, vars_with};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(vars_with(&[]), || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_dotenv_feeds_env_layer() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "OMARCHY_MANUAL_THEME=Kanagawa\n",
    )
    .unwrap();

    // temp_env restores the variable dotenvy sets.
    temp_env::with_vars(vars_with(&[]), || {
        let config = ConfigLoader::new()
            .load_dotenv()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.theme.name(), "Kanagawa");
    });
}

#[test]
#[serial]
fn test_real_env_wins_over_dotenv() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(
        temp_dir.path().join(".env"),
        "OMARCHY_MANUAL_THEME=Kanagawa\n",
    )
    .unwrap();

    temp_env::with_vars(vars_with(&[("OMARCHY_MANUAL_THEME", "Nord")]), || {
        let config = ConfigLoader::new()
            .load_dotenv()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.theme.name(), "Nord");
    });
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error_without_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    let marker = "private_marker_12345";
    fs::write(temp_dir.path().join(".env"), format!("INVALID_{marker}")).unwrap();

    temp_env::with_vars(vars_with(&[]), || {
        match ConfigLoader::new().load_dotenv() {
            Err(e @ ConfigError::DotenvParse { .. }) => {
                assert!(!e.to_string().contains(marker));
            }
            Err(other) => panic!("expected DotenvParse, got {other}"),
            Ok(_) => panic!("expected DotenvParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_vars(vars_with(&[("DOTENV_DISABLED", value)]), || {
            assert!(ConfigLoader::new().load_dotenv().is_ok());
        });
    }
}
