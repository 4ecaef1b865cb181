// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental prefix tree over the pattern dictionary.
//!
//! States live in an arena and are addressed by [`StateId`]. Ids are handed
//! out in creation order (root = 0) and are never reused, so the id returned
//! for a pattern stays valid after [`Trie::compile`].

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use serde::Deserialize;

use crate::automaton::Automaton;
use crate::symbol::Symbol;

/// Index of a state in the trie/automaton arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    /// The root state (empty prefix).
    pub const ROOT: StateId = StateId(0);

    /// Id for arena slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u32`.
    pub(crate) fn new(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => StateId(raw),
            Err(_) => state_overflow(index),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[cold]
#[allow(clippy::panic)]
fn state_overflow(index: usize) -> ! {
    panic!("state arena overflow: index {index} exceeds u32::MAX")
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(raw: u32) -> Self {
        StateId(raw)
    }
}

/// A trie node before compilation.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    /// Owning forward edges, keyed by symbol.
    pub(crate) transitions: BTreeMap<S, StateId>,
    /// True when this prefix is a complete pattern.
    pub(crate) accept: bool,
    /// Length of the prefix this node represents.
    pub(crate) depth: u32,
}

impl<S> Node<S> {
    fn new(depth: u32) -> Self {
        Self {
            transitions: BTreeMap::new(),
            accept: false,
            depth,
        }
    }
}

/// Which list index survives when the same pattern appears twice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DuplicatePolicy {
    /// The later index overwrites the earlier one.
    #[default]
    #[serde(rename = "last")]
    LastWins,
    /// The first index is kept.
    #[serde(rename = "first")]
    FirstWins,
}

/// Mapping from terminal state to the index of the pattern in its input list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternIds {
    map: BTreeMap<StateId, usize>,
}

impl PatternIds {
    fn record(&mut self, id: StateId, index: usize, policy: DuplicatePolicy) {
        match policy {
            DuplicatePolicy::LastWins => {
                if let Some(previous) = self.map.insert(id, index) {
                    tracing::debug!(state = %id, previous, index, "duplicate pattern, keeping later index");
                }
            }
            DuplicatePolicy::FirstWins => {
                let kept = *self.map.entry(id).or_insert(index);
                if kept != index {
                    tracing::debug!(state = %id, kept, index, "duplicate pattern, keeping first index");
                }
            }
        }
    }

    /// List index for a terminal state.
    pub fn get(&self, id: StateId) -> Option<usize> {
        self.map.get(&id).copied()
    }

    /// Number of distinct terminal states.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// `(state, index)` pairs in state order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, usize)> + '_ {
        self.map.iter().map(|(&id, &index)| (id, index))
    }
}

/// Mutable prefix tree; the build phase of the automaton.
#[derive(Debug, Clone)]
pub struct Trie<S> {
    nodes: Vec<Node<S>>,
}

impl<S: Symbol> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Trie<S> {
    /// Create a trie holding only the root state.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
        }
    }

    /// Add one pattern and return its terminal state.
    ///
    /// Re-adding a pattern walks the existing states and creates nothing.
    /// The empty pattern marks the root as accepting, which makes every input
    /// position a match.
    ///
    /// # Panics
    ///
    /// Panics if the trie would exceed `u32::MAX + 1` states.
    pub fn add<I>(&mut self, pattern: I) -> StateId
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = StateId::ROOT;
        for symbol in pattern {
            current = match self.nodes[current.index()].transitions.get(&symbol) {
                Some(&next) => next,
                None => self.push_child(current, symbol),
            };
        }
        self.nodes[current.index()].accept = true;
        current
    }

    /// Add patterns in order, mapping each terminal state to its list index.
    ///
    /// Identical patterns share a terminal state; the later index wins.
    pub fn add_patterns<I, P>(&mut self, patterns: I) -> PatternIds
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
    {
        self.add_patterns_with(patterns, DuplicatePolicy::LastWins)
    }

    /// Like [`Trie::add_patterns`] with an explicit duplicate policy.
    pub fn add_patterns_with<I, P>(&mut self, patterns: I, policy: DuplicatePolicy) -> PatternIds
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
    {
        let mut ids = PatternIds::default();
        for (index, pattern) in patterns.into_iter().enumerate() {
            let id = self.add(pattern);
            ids.record(id, index, policy);
        }
        ids
    }

    fn push_child(&mut self, parent: StateId, symbol: S) -> StateId {
        let id = StateId::new(self.nodes.len());
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(Node::new(depth));
        self.nodes[parent.index()].transitions.insert(symbol, id);
        tracing::trace!(state = %id, parent = %parent, depth, "created trie state");
        id
    }

    /// Number of states reachable from the root.
    pub fn size(&self) -> usize {
        let mut queue = VecDeque::from([StateId::ROOT]);
        let mut size = 0;
        while let Some(id) = queue.pop_front() {
            queue.extend(self.nodes[id.index()].transitions.values().copied());
            size += 1;
        }
        size
    }

    /// Number of states created so far (the next id to be assigned).
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.nodes.get(id.index()).is_some_and(|n| n.accept)
    }

    /// Prefix length of a state, `None` for an unknown id.
    pub fn depth(&self, id: StateId) -> Option<usize> {
        self.nodes.get(id.index()).map(|n| n.depth as usize)
    }

    /// Seal the trie into a matching automaton.
    pub fn compile(self) -> Automaton<S> {
        Automaton::compile(self.nodes)
    }
}

impl Trie<char> {
    /// Add a pattern given as text (one symbol per code point).
    pub fn add_word(&mut self, word: &str) -> StateId {
        self.add(word.chars())
    }

    /// Add text patterns in order; see [`Trie::add_patterns`].
    pub fn add_words<W: AsRef<str>>(&mut self, words: &[W]) -> PatternIds {
        self.add_patterns(words.iter().map(|w| w.as_ref().chars()))
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
