// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::trie::Trie;
use yare::parameterized;

fn reference() -> Automaton<char> {
    let mut trie = Trie::new();
    trie.add_words(&["a", "ab", "aca", "ba", "c", "cab"]);
    trie.compile()
}

fn ids(raw: &[u32]) -> Vec<StateId> {
    raw.iter().map(|&id| StateId::from(id)).collect()
}

#[test]
fn root_fails_to_itself() {
    let automaton = reference();
    assert_eq!(automaton.failure(StateId::ROOT), Some(StateId::ROOT));
}

// States: a=1 ab=2 ac=3 aca=4 b=5 ba=6 c=7 ca=8 cab=9
#[parameterized(
    a = { 1, 0 },
    ab = { 2, 5 },
    ac = { 3, 7 },
    aca = { 4, 8 },
    b = { 5, 0 },
    ba = { 6, 1 },
    c = { 7, 0 },
    ca = { 8, 1 },
    cab = { 9, 2 },
)]
fn failure_links(state: u32, expected: u32) {
    let automaton = reference();
    assert_eq!(
        automaton.failure(StateId::from(state)),
        Some(StateId::from(expected))
    );
}

#[parameterized(
    a = { 1, &[] },
    ab = { 2, &[] },
    ac = { 3, &[7] },
    aca = { 4, &[1] },
    ba = { 6, &[1] },
    ca = { 8, &[1] },
    cab = { 9, &[2] },
)]
fn output_sets(state: u32, expected: &[u32]) {
    let automaton = reference();
    assert_eq!(automaton.outputs(StateId::from(state)), ids(expected).as_slice());
}

#[test]
fn failure_follows_chain_past_shallow_target() {
    // abcx fails through bc (no x) to c, which extends to cx.
    let mut trie = Trie::new();
    trie.add_words(&["abcx", "bc", "cx"]);
    let automaton = trie.compile();

    assert_eq!(automaton.failure(StateId::from(4)), Some(StateId::from(8)));
    assert_eq!(automaton.outputs(StateId::from(4)), ids(&[8]).as_slice());
    assert_eq!(automaton.outputs(StateId::from(3)), ids(&[6]).as_slice());
}

#[test]
fn output_set_collects_whole_chain_nearest_first() {
    // abcd -> bcd -> cd -> d, all accepting
    let mut trie = Trie::new();
    trie.add_words(&["abcd", "bcd", "cd", "d"]);
    let automaton = trie.compile();

    let abcd = StateId::from(4);
    assert_eq!(automaton.outputs(abcd), ids(&[7, 9, 10]).as_slice());
}

#[test]
fn empty_pattern_reaches_every_output_set_once() {
    let mut trie = Trie::new();
    trie.add_words(&["", "ab", "b"]);
    let automaton = trie.compile();

    // a=1 ab=2 b=3
    assert_eq!(automaton.outputs(StateId::from(1)), ids(&[0]).as_slice());
    assert_eq!(automaton.outputs(StateId::from(2)), ids(&[3, 0]).as_slice());
    assert_eq!(automaton.outputs(StateId::from(3)), ids(&[0]).as_slice());
    assert!(automaton.outputs(StateId::ROOT).is_empty());
}

#[test]
fn accessors_for_unknown_state() {
    let automaton = reference();
    let unknown = StateId::from(99);
    assert_eq!(automaton.failure(unknown), None);
    assert_eq!(automaton.depth(unknown), None);
    assert!(automaton.outputs(unknown).is_empty());
    assert!(!automaton.is_accepting(unknown));
}

#[test]
fn state_count_and_depth() {
    let automaton = reference();
    assert_eq!(automaton.state_count(), 10);
    assert_eq!(automaton.max_depth(), 3);
    assert_eq!(automaton.depth(StateId::from(9)), Some(3));
}

#[test]
fn empty_dictionary_compiles_to_root() {
    let automaton = Trie::<char>::new().compile();
    assert_eq!(automaton.state_count(), 1);
    assert_eq!(automaton.max_depth(), 0);
}

#[test]
fn automaton_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Automaton<char>>();
    assert_send_sync::<Automaton<u8>>();
}
