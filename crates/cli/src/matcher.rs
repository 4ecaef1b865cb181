// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming match scan over a compiled automaton.
//!
//! Every scan owns only a cursor and its output, so any number of scans may
//! run over one [`Automaton`] at the same time.

use std::iter::FusedIterator;
use std::slice;

use crate::automaton::Automaton;
use crate::symbol::Symbol;
use crate::trie::StateId;

/// A pattern occurrence: terminal state and 0-based offset of its last symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub id: StateId,
    pub end: usize,
}

impl Match {
    pub fn new(id: StateId, end: usize) -> Self {
        Self { id, end }
    }

    /// Offset of the first symbol for a pattern of `len` symbols.
    ///
    /// An empty pattern yields `end + 1`, an empty span. `None` when a pattern
    /// of `len` symbols cannot end at `end`.
    pub fn start(&self, len: usize) -> Option<usize> {
        self.end.checked_add(1)?.checked_sub(len)
    }
}

/// Matches ending at one input offset, in emission order.
#[derive(Debug, Clone)]
pub struct Emitted<'a> {
    own: Option<StateId>,
    chain: slice::Iter<'a, StateId>,
    end: usize,
}

impl Emitted<'_> {
    fn empty() -> Self {
        Self {
            own: None,
            chain: (&[] as &[StateId]).iter(),
            end: 0,
        }
    }
}

impl Iterator for Emitted<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        if let Some(id) = self.own.take() {
            return Some(Match::new(id, self.end));
        }
        self.chain.next().map(|&id| Match::new(id, self.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.chain.len() + usize::from(self.own.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Emitted<'_> {}
impl FusedIterator for Emitted<'_> {}

/// Incremental scanner: feed symbols one at a time.
///
/// Useful when input arrives in chunks; matches spanning chunk boundaries
/// are still found because the cursor state carries over.
#[derive(Debug, Clone)]
pub struct Cursor<'a, S> {
    automaton: &'a Automaton<S>,
    state: StateId,
    offset: usize,
}

impl<'a, S: Symbol> Cursor<'a, S> {
    fn new(automaton: &'a Automaton<S>) -> Self {
        Self {
            automaton,
            state: StateId::ROOT,
            offset: 0,
        }
    }

    /// Consume one symbol and return the matches ending on it.
    pub fn step(&mut self, symbol: S) -> Emitted<'a> {
        let end = self.offset;
        self.offset += 1;
        self.state = self.automaton.next_state(self.state, symbol);
        let (own, chain) = self.automaton.emitted(self.state);
        Emitted {
            own,
            chain: chain.iter(),
            end,
        }
    }

    /// Offset the next symbol will be reported at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current automaton state.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Return to the root at offset 0.
    pub fn reset(&mut self) {
        self.state = StateId::ROOT;
        self.offset = 0;
    }
}

/// Lazy iterator over all matches in an input sequence.
#[derive(Debug, Clone)]
pub struct Matches<'a, S, I> {
    cursor: Cursor<'a, S>,
    input: I,
    pending: Emitted<'a>,
}

impl<S: Symbol, I: Iterator<Item = S>> Iterator for Matches<'_, S, I> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(m) = self.pending.next() {
                return Some(m);
            }
            let symbol = self.input.next()?;
            self.pending = self.cursor.step(symbol);
        }
    }
}

impl<S: Symbol> Automaton<S> {
    /// Start an incremental scan at the root.
    pub fn cursor(&self) -> Cursor<'_, S> {
        Cursor::new(self)
    }

    /// Lazily report every match in `input`, in input order.
    pub fn find_iter<I>(&self, input: I) -> Matches<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        Matches {
            cursor: self.cursor(),
            input: input.into_iter(),
            pending: Emitted::empty(),
        }
    }

    /// Every match in `input`, including overlapping and nested ones.
    ///
    /// At a single offset the landing state's own pattern comes first,
    /// followed by the patterns on its failure chain, nearest first.
    pub fn search<I>(&self, input: I) -> Vec<Match>
    where
        I: IntoIterator<Item = S>,
    {
        self.find_iter(input).collect()
    }
}

impl Automaton<char> {
    /// Search text, one symbol per code point. Offsets count chars, not bytes.
    pub fn search_str(&self, text: &str) -> Vec<Match> {
        self.search(text.chars())
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
