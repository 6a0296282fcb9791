//! # Word Trie
//!
//! A prefix-indexed word store for autocomplete.
//!
//! This crate provides a character trie that indexes whole words, suggests every
//! indexed word starting with a given prefix, and ranks words that users have
//! selected ahead of the rest.
//!
//! ## Features
//!
//! - **Prefix Suggestions**: Depth-first collection of every word under a prefix
//! - **Popularity Ranking**: Selected words surface before unselected ones
//! - **Soft Delete**: Deleting a word unindexes it but keeps its nodes for cheap re-insertion
//! - **Pluggable Symbols**: Split words per `char` or per byte
//! - **Shared Access**: A lock-guarded handle for multi-threaded hosts
//!
//! ## Example
//!
//! ```rust
//! use word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.populate(vec!["pizza", "pizzeria", "piano"]).unwrap();
//!
//! assert_eq!(trie.suggest("piz"), vec!["pizza", "pizzeria"]);
//!
//! // Selected words move to the front
//! trie.select("pizzeria").unwrap();
//! assert_eq!(trie.suggest("piz"), vec!["pizzeria", "pizza"]);
//! ```

pub mod node;
mod shared;
mod symbols;
mod trie;

// Re-export public types
pub use crate::node::{Children, Node};
pub use crate::shared::SharedTrie;
pub use crate::symbols::{ByteSymbols, CharSymbols, Symbols};
pub use crate::trie::Trie;

/// A trie that uses one `char` per symbol.
pub type WordTrie = Trie<CharSymbols>;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The argument cannot be used for this operation, e.g. an empty word
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The word is not currently indexed
    #[error("word not found: {0:?}")]
    NotFound(String),
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, Error>;
