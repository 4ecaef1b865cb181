//! Output formatting for search results.

use serde::Deserialize;

use crate::dictionary::WordMatch;

pub mod json;
pub mod text;

/// Output format selectable with `-o` or `[output] format`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `start,end: word` lines
    #[default]
    Text,
    /// Single JSON document
    Json,
}

/// Matches found in one input.
#[derive(Debug, Clone)]
pub struct InputReport<'a> {
    /// File path, or `-` for standard input.
    pub source: String,
    pub matches: Vec<WordMatch<'a>>,
}

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Prefix each line with the input name.
    pub show_source: bool,
    /// Print only per-input match counts.
    pub count_only: bool,
}

/// Total matches across all reports.
pub fn total_matches(reports: &[InputReport<'_>]) -> usize {
    reports.iter().map(|r| r.matches.len()).sum()
}
