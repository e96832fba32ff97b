//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod dotenv_tests;
pub mod env_tests;
pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, for clearing with `temp_env`.
pub const ALL_VARS: [&str; 5] = [
    "OMARCHY_MANUAL_THEME",
    "OMARCHY_MANUAL_PAGE",
    "OMARCHY_MANUAL_HINT_TTL_MS",
    "OMARCHY_MANUAL_SKIP_INTRO",
    "DOTENV_DISABLED",
];

/// `ALL_VARS` unset, with `overrides` applied on top.
pub fn vars_with<'a>(overrides: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut vars: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|v| (*v, None)).collect();
    for &(key, value) in overrides {
        vars.retain(|(k, _)| *k != key);
        vars.push((key, Some(value)));
    }
    vars
}
