// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text dictionary: patterns, their compiled automaton, and id resolution.

use serde::Serialize;

use crate::automaton::Automaton;
use crate::error::{Error, Result};
use crate::matcher::Match;
use crate::trie::{DuplicatePolicy, PatternIds, Trie};

/// A compiled set of text patterns.
#[derive(Debug, Clone)]
pub struct Dictionary {
    patterns: Vec<String>,
    ids: PatternIds,
    automaton: Automaton<char>,
}

/// A match resolved back to its pattern.
///
/// Offsets count chars and are inclusive; an empty pattern has
/// `start == end + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch<'a> {
    /// Index of the pattern in the dictionary list.
    pub index: usize,
    pub pattern: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Dictionary {
    /// Compile `patterns`; duplicates resolve to the later index.
    pub fn new<W: AsRef<str>>(patterns: &[W]) -> Self {
        Self::with_policy(patterns, DuplicatePolicy::default())
    }

    pub fn with_policy<W: AsRef<str>>(patterns: &[W], policy: DuplicatePolicy) -> Self {
        let patterns: Vec<String> = patterns.iter().map(|p| p.as_ref().to_string()).collect();
        let mut trie = Trie::new();
        let ids = trie.add_patterns_with(patterns.iter().map(|p| p.chars()), policy);
        tracing::debug!(
            patterns = patterns.len(),
            states = trie.state_count(),
            "built dictionary trie"
        );
        Self {
            patterns,
            ids,
            automaton: trie.compile(),
        }
    }

    /// Every occurrence of every pattern in `text`.
    pub fn find(&self, text: &str) -> Result<Vec<WordMatch<'_>>> {
        self.automaton
            .find_iter(text.chars())
            .map(|m| self.resolve(m))
            .collect()
    }

    /// Number of matches in `text`, without resolving them.
    pub fn count(&self, text: &str) -> usize {
        self.automaton.find_iter(text.chars()).count()
    }

    /// Map a raw automaton match to its pattern text and span.
    pub fn resolve(&self, m: Match) -> Result<WordMatch<'_>> {
        let index = self
            .ids
            .get(m.id)
            .ok_or_else(|| Error::Internal(format!("no pattern for state {}", m.id)))?;
        let pattern = self
            .patterns
            .get(index)
            .ok_or_else(|| Error::Internal(format!("pattern index {index} out of range")))?;
        let start = m.start(pattern.chars().count()).ok_or_else(|| {
            Error::Internal(format!("pattern {index} does not fit before offset {}", m.end))
        })?;
        Ok(WordMatch {
            index,
            pattern,
            start,
            end: m.end,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn ids(&self) -> &PatternIds {
        &self.ids
    }

    pub fn automaton(&self) -> &Automaton<char> {
        &self.automaton
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
