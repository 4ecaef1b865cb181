//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use tempfile::TempDir;

use crate::config::CONFIG_FILE_NAME;

/// Creates a temp directory with custom config content.
///
/// The directory is marked as a git root so discovery never escapes it.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), config).unwrap();
    dir
}

/// Writes a pattern file (one pattern per line) into `dir`.
pub fn write_patterns(dir: &TempDir, name: &str, patterns: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, patterns.join("\n")).unwrap();
    path
}
