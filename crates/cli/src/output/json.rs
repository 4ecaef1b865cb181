// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::{InputReport, total_matches};
use crate::dictionary::WordMatch;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub inputs: Vec<InputOutput<'a>>,
    pub total: usize,
}

/// Matches for one input.
#[derive(Debug, Serialize)]
pub struct InputOutput<'a> {
    pub source: &'a str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<&'a [WordMatch<'a>]>,
}

impl<'a> JsonOutput<'a> {
    /// Build the document; `count_only` drops the match lists.
    pub fn new(reports: &'a [InputReport<'a>], count_only: bool) -> Self {
        let inputs = reports
            .iter()
            .map(|r| InputOutput {
                source: &r.source,
                count: r.matches.len(),
                matches: (!count_only).then_some(r.matches.as_slice()),
            })
            .collect();
        Self {
            inputs,
            total: total_matches(reports),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W> {
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the whole document followed by a newline.
    pub fn write(&mut self, output: &JsonOutput<'_>) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, output)?;
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
