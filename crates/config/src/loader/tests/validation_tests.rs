//! Validation tests for values that reach `ConfigLoader::build`.

use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::Page;

#[test]
fn test_unknown_theme_is_an_error() {
    let err = ConfigLoader::new()
        .with_theme("Solarized".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTheme(ref name) if name == "Solarized"));
    assert!(err.to_string().contains("Solarized"));
}

#[test]
fn test_theme_name_is_case_insensitive() {
    let config = ConfigLoader::new()
        .with_theme("rose pine".to_string())
        .build()
        .unwrap();
    assert_eq!(config.theme.name(), "Rose Pine");
}

#[test]
fn test_unknown_page_is_an_error() {
    let err = ConfigLoader::new()
        .with_page("settings".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownPage(_)));
}

#[test]
fn test_page_by_number() {
    let config = ConfigLoader::new()
        .with_page("3".to_string())
        .build()
        .unwrap();
    assert_eq!(config.start_page, Page::Themes);
}

#[test]
fn test_hint_ttl_bounds() {
    let too_short = ConfigLoader::new().with_hint_ttl_ms(99).build();
    assert!(matches!(too_short, Err(ConfigError::InvalidHintTtl { .. })));

    let too_long = ConfigLoader::new().with_hint_ttl_ms(60_001).build();
    assert!(matches!(too_long, Err(ConfigError::InvalidHintTtl { .. })));

    let min = ConfigLoader::new().with_hint_ttl_ms(100).build().unwrap();
    assert_eq!(min.hint_ttl, Duration::from_millis(100));

    let max = ConfigLoader::new().with_hint_ttl_ms(60_000).build().unwrap();
    assert_eq!(max.hint_ttl, Duration::from_secs(60));
}
