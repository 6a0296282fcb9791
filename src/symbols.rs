//! Defines how words are split into the symbols that label trie edges.
use std::fmt::Debug;
use std::hash::Hash;

/// A strategy for splitting a word into symbols and joining symbols back into a word.
///
/// The trie stores one node per symbol, so the choice of strategy decides what
/// counts as a "letter" when sharing prefixes.
pub trait Symbols: Clone {
    /// The atomic unit stored on each edge.
    type Symbol: Copy + Eq + Hash + Debug;

    /// Splits `word` into its symbols, in order.
    fn split(word: &str) -> Vec<Self::Symbol>;

    /// Rebuilds a word from a sequence of symbols.
    fn join(symbols: &[Self::Symbol]) -> String;
}

/// One `char` per symbol. This is the default for [`Trie`](crate::Trie).
#[derive(Debug, Clone, Default)]
pub struct CharSymbols;

impl Symbols for CharSymbols {
    type Symbol = char;

    fn split(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn join(symbols: &[char]) -> String {
        symbols.iter().collect()
    }
}

/// One UTF-8 byte per symbol.
///
/// Words that share a multi-byte character's leading bytes share nodes too.
/// Joined paths that end mid-character are decoded lossily, but every complete
/// word is the full byte sequence of an inserted `&str` and so decodes exactly.
#[derive(Debug, Clone, Default)]
pub struct ByteSymbols;

impl Symbols for ByteSymbols {
    type Symbol = u8;

    fn split(word: &str) -> Vec<u8> {
        word.as_bytes().to_vec()
    }

    fn join(symbols: &[u8]) -> String {
        String::from_utf8_lossy(symbols).into_owned()
    }
}
