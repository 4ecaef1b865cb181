// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled Aho-Corasick automaton.
//!
//! [`Trie::compile`](crate::Trie::compile) is the only way to obtain an
//! [`Automaton`], so a graph without failure links can never be searched.
//! Once built the automaton is never mutated and can be shared across
//! threads for concurrent scans.

use std::collections::BTreeMap;

use crate::queue::DepthQueue;
use crate::symbol::Symbol;
use crate::trie::{Node, StateId};

#[derive(Debug, Clone)]
struct CompiledState<S> {
    transitions: BTreeMap<S, StateId>,
    accept: bool,
    depth: u32,
    /// Longest proper suffix of this prefix that is also a state.
    failure: StateId,
    /// Accepting states on the failure chain, nearest first.
    matching: Vec<StateId>,
}

impl<S> From<Node<S>> for CompiledState<S> {
    fn from(node: Node<S>) -> Self {
        Self {
            transitions: node.transitions,
            accept: node.accept,
            depth: node.depth,
            failure: StateId::ROOT,
            matching: Vec::new(),
        }
    }
}

/// A trie augmented with failure links and resolved output sets.
#[derive(Debug, Clone)]
pub struct Automaton<S> {
    states: Vec<CompiledState<S>>,
}

impl<S: Symbol> Automaton<S> {
    /// Compute failure links and output sets in one breadth-first pass.
    pub(crate) fn compile(nodes: Vec<Node<S>>) -> Self {
        let mut states: Vec<CompiledState<S>> =
            nodes.into_iter().map(CompiledState::from).collect();
        let mut queue = DepthQueue::new();

        // Root fails to itself; its children fail to the root.
        for &child in states[StateId::ROOT.index()].transitions.values() {
            queue.push(child, 1);
        }

        while let Some(id) = queue.pop() {
            let failure = states[id.index()].failure;

            // `failure` is shallower, so its output set is already final.
            let target = &states[failure.index()];
            let mut matching = Vec::with_capacity(target.matching.len() + 1);
            if target.accept {
                matching.push(failure);
            }
            matching.extend_from_slice(&target.matching);

            let depth = states[id.index()].depth + 1;
            let children: Vec<(S, StateId)> = states[id.index()]
                .transitions
                .iter()
                .map(|(&symbol, &child)| (symbol, child))
                .collect();
            states[id.index()].matching = matching;

            for (symbol, child) in children {
                states[child.index()].failure = follow(&states, failure, symbol);
                queue.push(child, depth);
            }
        }

        tracing::debug!(states = states.len(), "compiled automaton");
        Self { states }
    }

    /// One scan step: follow failure links until `symbol` can be consumed.
    ///
    /// Falls back to the root when no suffix of the current prefix extends
    /// with `symbol`.
    pub(crate) fn next_state(&self, current: StateId, symbol: S) -> StateId {
        follow(&self.states, current, symbol)
    }

    /// Ids reported when the scan lands on `id`: its own id when accepting,
    /// then the resolved output set.
    pub(crate) fn emitted(&self, id: StateId) -> (Option<StateId>, &[StateId]) {
        let state = &self.states[id.index()];
        (state.accept.then_some(id), &state.matching)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.states.get(id.index()).is_some_and(|s| s.accept)
    }

    /// Failure target of a state, `None` for an unknown id.
    pub fn failure(&self, id: StateId) -> Option<StateId> {
        self.states.get(id.index()).map(|s| s.failure)
    }

    /// Accepting states reachable through the failure chain of `id`.
    pub fn outputs(&self, id: StateId) -> &[StateId] {
        self.states
            .get(id.index())
            .map(|s| s.matching.as_slice())
            .unwrap_or_default()
    }

    /// Prefix length of a state; for accepting states, the pattern length.
    pub fn depth(&self, id: StateId) -> Option<usize> {
        self.states.get(id.index()).map(|s| s.depth as usize)
    }

    /// Length of the longest pattern prefix in the automaton.
    pub fn max_depth(&self) -> usize {
        self.states
            .iter()
            .map(|s| s.depth as usize)
            .max()
            .unwrap_or_default()
    }
}

/// Walk the failure chain from `from` until a transition on `symbol` exists.
fn follow<S: Symbol>(states: &[CompiledState<S>], from: StateId, symbol: S) -> StateId {
    let mut current = from;
    loop {
        let state = &states[current.index()];
        if let Some(&next) = state.transitions.get(&symbol) {
            return next;
        }
        if current == StateId::ROOT {
            return StateId::ROOT;
        }
        current = state.failure;
    }
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
