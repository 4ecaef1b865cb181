//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a Command configured to run the acmatch binary
pub fn acmatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("acmatch"));
    cmd.env_remove("ACMATCH_CONFIG")
        .env_remove("ACMATCH_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A scratch project directory, marked as a git root so config discovery
/// never leaves it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("acmatch.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// acmatch command running inside the project.
    pub fn cmd(&self) -> Command {
        let mut cmd = acmatch_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
