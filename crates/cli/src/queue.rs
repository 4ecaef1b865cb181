// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Breadth-first work queue used while compiling the automaton.

use std::collections::VecDeque;

use crate::trie::StateId;

/// FIFO of states tagged with their depth.
///
/// Output sets are only correct when states leave the queue in
/// non-decreasing depth order, so `pop` asserts it in debug builds.
#[derive(Debug, Default)]
pub(crate) struct DepthQueue {
    items: VecDeque<(StateId, u32)>,
    last_depth: u32,
}

impl DepthQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, id: StateId, depth: u32) {
        self.items.push_back((id, depth));
    }

    pub(crate) fn pop(&mut self) -> Option<StateId> {
        let (id, depth) = self.items.pop_front()?;
        debug_assert!(
            depth >= self.last_depth,
            "state {id} dequeued at depth {depth} after depth {}",
            self.last_depth
        );
        self.last_depth = depth;
        Some(id)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
