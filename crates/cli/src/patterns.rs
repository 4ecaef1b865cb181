//! Assemble the pattern list for a run from config and flags.
//!
//! Order is config words, config files, `-p` flags, then `-f` files, so the
//! list index reported for a match is stable across runs.

use std::path::Path;

use crate::cli::PatternArgs;
use crate::config::PatternsConfig;
use crate::error::{Error, Result};
use crate::reader::FileReader;
use crate::trie::DuplicatePolicy;

/// Patterns plus the duplicate policy to build them with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternList {
    pub patterns: Vec<String>,
    pub policy: DuplicatePolicy,
}

/// Collect patterns from every source. An empty result is an argument error.
pub fn collect(config: &PatternsConfig, args: &PatternArgs, reader: &FileReader) -> Result<PatternList> {
    let mut patterns = config.words.clone();
    for file in &config.files {
        patterns.extend(read_pattern_file(file, reader)?);
    }
    patterns.extend(args.patterns.iter().cloned());
    for file in &args.pattern_files {
        patterns.extend(read_pattern_file(file, reader)?);
    }

    if patterns.is_empty() {
        return Err(Error::Argument(
            "no patterns given (use -p, -f, or [patterns] in acmatch.toml)".to_string(),
        ));
    }

    tracing::debug!(count = patterns.len(), "collected patterns");
    Ok(PatternList {
        patterns,
        policy: args.policy(config.duplicates),
    })
}

/// Read one pattern per line, skipping blank lines.
pub fn read_pattern_file(path: &Path, reader: &FileReader) -> Result<Vec<String>> {
    let text = reader.read_text(path)?;
    Ok(text
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
