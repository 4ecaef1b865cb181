//! Multi-pattern string matching with an Aho-Corasick automaton.
//!
//! Build a [`Trie`] from the pattern dictionary, seal it with
//! [`Trie::compile`], then scan any number of inputs with
//! [`Automaton::search`] or the streaming [`Automaton::find_iter`] /
//! [`Automaton::cursor`]:
//!
//! ```
//! use acmatch::Trie;
//!
//! let mut trie = Trie::new();
//! let ids = trie.add_words(&["he", "she", "his", "hers"]);
//! let automaton = trie.compile();
//!
//! let found: Vec<_> = automaton
//!     .search_str("ushers")
//!     .into_iter()
//!     .map(|m| (ids.get(m.id), m.end))
//!     .collect();
//! assert_eq!(found, vec![(Some(1), 3), (Some(0), 3), (Some(3), 5)]);
//! ```

pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod output;
pub mod patterns;
mod queue;
pub mod reader;
pub mod symbol;
pub mod trie;

pub use automaton::Automaton;
pub use dictionary::{Dictionary, WordMatch};
pub use error::{Error, ExitCode, Result};
pub use matcher::{Cursor, Emitted, Match, Matches};
pub use symbol::Symbol;
pub use trie::{DuplicatePolicy, PatternIds, StateId, Trie};

#[cfg(test)]
pub mod test_utils;
