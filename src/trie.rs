//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! indexing words and suggesting completions.

use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::node::{Children, Node};
use crate::symbols::{CharSymbols, Symbols};
use crate::{Error, Result};

/// A mutable prefix trie of words with popularity ranking.
///
/// Every distinct symbol at every depth gets exactly one node, so words that
/// share a prefix share the path for it. Deleting a word only clears its
/// boundary flag; nodes are never removed, so the tree only grows.
#[derive(Debug, Clone)]
pub struct Trie<C: Symbols = CharSymbols> {
    /// Top-level nodes, one per distinct first symbol
    children: Children<C::Symbol>,

    /// The number of currently indexed words
    word_count: usize,

    _symbols: PhantomData<C>,
}

/// Words gathered during a suggestion walk, split by popularity.
struct Tiers {
    popular: Vec<String>,
    normal: Vec<String>,
}

impl Tiers {
    /// Popular words, most recently discovered first, then the rest in discovery order.
    fn into_ordered(self) -> Vec<String> {
        let Tiers { mut popular, normal } = self;
        popular.reverse();
        popular.extend(normal);
        popular
    }
}

impl<C: Symbols> Trie<C> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::WordTrie;
    ///
    /// let trie = WordTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            children: Children::new(),
            word_count: 0,
            _symbols: PhantomData,
        }
    }

    /// Builds a trie from a sequence of words, stopping at the first invalid one.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::WordTrie;
    ///
    /// let trie = WordTrie::from_words(vec!["cat", "can", "cattle"]).unwrap();
    /// assert_eq!(trie.word_count(), 3);
    /// ```
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.populate(words)?;
        Ok(trie)
    }

    /// Returns the number of currently indexed words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of currently indexed words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word is currently indexed.
    ///
    /// A trie whose words have all been deleted is empty even though it keeps
    /// their nodes.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the top-level children, keyed by first symbol.
    pub fn children(&self) -> &Children<C::Symbol> {
        &self.children
    }

    /// Returns the total number of nodes, including those of deleted words.
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .map(|(_, child)| child.subtree_nodes())
            .sum()
    }

    /// Returns the node at the end of `word`'s path, whether or not it is a word boundary.
    pub fn node(&self, word: &str) -> Option<&Node<C::Symbol>> {
        find(&self.children, &C::split(word))
    }

    /// Returns `true` if `word` is currently indexed.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::WordTrie;
    ///
    /// let trie = WordTrie::from_words(vec!["catalog"]).unwrap();
    /// assert!(trie.contains("catalog"));
    /// assert!(!trie.contains("cat"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).map_or(false, Node::is_complete)
    }

    /// Returns the popularity of `word`, or `None` if it is not currently indexed.
    pub fn popularity(&self, word: &str) -> Option<u64> {
        self.node(word)
            .filter(|node| node.is_complete())
            .map(Node::popularity)
    }

    /// Indexes `word`.
    ///
    /// Missing nodes along the path are created. Inserting a word that is
    /// already indexed changes nothing; inserting a deleted word indexes it again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `word` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::WordTrie;
    ///
    /// let mut trie = WordTrie::new();
    /// trie.insert("hello").unwrap();
    /// trie.insert("hello").unwrap();
    /// assert_eq!(trie.word_count(), 1);
    ///
    /// assert!(trie.insert("").is_err());
    /// ```
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let symbols = C::split(word);
        let (first, rest) = symbols
            .split_first()
            .ok_or_else(|| Error::InvalidArgument("cannot insert an empty word".to_string()))?;

        let mut current = self.children.get_or_insert(*first);
        for symbol in rest {
            current = current.children.get_or_insert(*symbol);
        }

        if !current.complete_word {
            current.complete_word = true;
            self.word_count += 1;
            debug!(word = word, word_count = self.word_count, "indexed word");
        }

        Ok(())
    }

    /// Inserts each word in order.
    ///
    /// # Errors
    ///
    /// Stops at the first word that fails to insert and returns its error.
    /// Words before it stay indexed.
    pub fn populate<I, W>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let before = self.word_count;
        let mut seen = 0usize;

        for word in words {
            self.insert(word.as_ref())?;
            seen += 1;
        }

        debug!(
            seen,
            added = self.word_count - before,
            word_count = self.word_count,
            "populated trie"
        );
        Ok(())
    }

    /// Returns every indexed word that starts with `prefix`.
    ///
    /// Each prefix symbol that has no matching child is skipped, so an unknown
    /// prefix falls back to the deepest node that was reached instead of
    /// failing. Suggestions are rebuilt from the symbols actually followed.
    ///
    /// Words that have been selected come first, the most recently discovered
    /// one at the front. The remaining words follow in depth-first order,
    /// visiting children in the order they were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::WordTrie;
    ///
    /// let trie = WordTrie::from_words(vec!["monkey", "money", "many"]).unwrap();
    /// assert_eq!(trie.suggest("mon"), vec!["monkey", "money"]);
    /// ```
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut reached: Option<&Node<C::Symbol>> = None;
        let mut children = &self.children;

        for symbol in C::split(prefix) {
            if let Some(child) = children.get(&symbol) {
                path.push(symbol);
                children = &child.children;
                reached = Some(child);
            }
        }

        trace!(prefix = prefix, consumed = path.len(), "suggest descended");

        let mut tiers = Tiers {
            popular: Vec::new(),
            normal: Vec::new(),
        };

        match reached {
            Some(node) => collect::<C>(node, &mut path, &mut tiers),
            None => collect_children::<C>(&self.children, &mut path, &mut tiers),
        }

        tiers.into_ordered()
    }

    /// Records one use of `word`, ranking it ahead of unselected words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `word` is not currently indexed. Nothing is
    /// modified in that case.
    pub fn select(&mut self, word: &str) -> Result<()> {
        match find_mut(&mut self.children, &C::split(word)) {
            Some(node) if node.complete_word => {
                node.popularity = node.popularity.saturating_add(1);
                debug!(word = word, popularity = node.popularity, "selected word");
                Ok(())
            }
            _ => Err(Error::NotFound(word.to_string())),
        }
    }

    /// Unindexes `word`, keeping its nodes in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `word` is not currently indexed. The word
    /// count is left untouched in that case.
    pub fn delete(&mut self, word: &str) -> Result<()> {
        match find_mut(&mut self.children, &C::split(word)) {
            Some(node) if node.complete_word => {
                node.complete_word = false;
                self.word_count -= 1;
                debug!(word = word, word_count = self.word_count, "deleted word");
                Ok(())
            }
            _ => Err(Error::NotFound(word.to_string())),
        }
    }
}

/// Follows `symbols` down from `children`. An empty path has no node.
fn find<'a, S: PartialEq>(children: &'a Children<S>, symbols: &[S]) -> Option<&'a Node<S>> {
    let (first, rest) = symbols.split_first()?;
    let mut current = children.get(first)?;
    for symbol in rest {
        current = current.children.get(symbol)?;
    }
    Some(current)
}

fn find_mut<'a, S: PartialEq>(
    children: &'a mut Children<S>,
    symbols: &[S],
) -> Option<&'a mut Node<S>> {
    let (first, rest) = symbols.split_first()?;
    let mut current = children.get_mut(first)?;
    for symbol in rest {
        current = current.children.get_mut(symbol)?;
    }
    Some(current)
}

// Depth-first; `path` holds the symbols from the root to `node`.
fn collect<C: Symbols>(node: &Node<C::Symbol>, path: &mut Vec<C::Symbol>, tiers: &mut Tiers) {
    if node.complete_word {
        let word = C::join(path);
        if node.popularity == 0 {
            tiers.normal.push(word);
        } else {
            tiers.popular.push(word);
        }
    }
    collect_children::<C>(&node.children, path, tiers);
}

fn collect_children<C: Symbols>(
    children: &Children<C::Symbol>,
    path: &mut Vec<C::Symbol>,
    tiers: &mut Tiers,
) {
    for (symbol, child) in children.iter() {
        path.push(*symbol);
        collect::<C>(child, path, tiers);
        path.pop();
    }
}

impl<C: Symbols> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Structural equality: same nodes, flags, popularity and insertion order.
impl<C: Symbols> PartialEq for Trie<C> {
    fn eq(&self, other: &Self) -> bool {
        self.word_count == other.word_count && self.children == other.children
    }
}

impl<C: Symbols> Eq for Trie<C> {}
