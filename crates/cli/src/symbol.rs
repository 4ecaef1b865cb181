// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alphabet abstraction.
//!
//! Any small, totally ordered value type can be fed through the automaton.
//! `char` (a Unicode code point) is the alphabet used by [`crate::Dictionary`];
//! `u8` works for raw byte streams.

use std::fmt::Debug;

/// A single input symbol.
///
/// Transitions are kept in ordered maps, so symbols need `Ord` rather than
/// `Hash`. Ordering also fixes the order children are visited during
/// compilation, which keeps compiled automatons deterministic.
pub trait Symbol: Copy + Ord + Debug {}

impl<T: Copy + Ord + Debug> Symbol for T {}
