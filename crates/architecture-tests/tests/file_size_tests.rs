//! Architecture tests for file size limits.
//!
//! - Files >700 LOC produce a warning.
//! - Files >1000 LOC are presumed mis-scoped (test failure).

mod common;

use std::fs;
use std::path::Path;

use common::{find_workspace_root, rust_files};

const WARNING_THRESHOLD: usize = 700;
const FAILURE_THRESHOLD: usize = 1000;

/// Files excluded from size checks, as (path_suffix, justification).
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");
    assert!(crates_dir.exists(), "crates/ directory not found at {crates_dir:?}");

    let mut failures = Vec::new();
    for path in rust_files(&crates_dir) {
        if path.to_string_lossy().contains("architecture-tests") {
            continue;
        }
        let loc = count_loc(&path);
        let relative = path.strip_prefix(&workspace_root).unwrap_or(&path);
        let relative = relative.to_string_lossy().to_string();
        let excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !excluded {
            failures.push(format!("{relative}: {loc} lines"));
        } else if loc > WARNING_THRESHOLD {
            eprintln!("[architecture] {relative}: {loc} LOC exceeds {WARNING_THRESHOLD}");
        }
    }

    assert!(
        failures.is_empty(),
        "Files exceeding {FAILURE_THRESHOLD} LOC (presumed mis-scoped):\n  {}",
        failures.join("\n  ")
    );
}

/// Count lines of code in a file, excluding blank lines and line comments.
fn count_loc(path: &Path) -> usize {
    let content = fs::read_to_string(path).expect("Failed to read file");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .count()
}

#[test]
fn test_count_loc_skips_comments_and_blanks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("sample.rs");
    fs::write(
        &file,
        "//! Module docs\n\n/// Function docs\nfn main() {\n    // note\n    let x = 5; // inline\n}\n",
    )
    .expect("write sample");

    assert_eq!(count_loc(&file), 3);
}
