//! Node implementation for the word trie.
//!
//! This module contains the `Node` record and the insertion-ordered `Children`
//! map that links nodes together. Each node stands for one symbol on the path
//! of one or more words; a node never has two parents.

/// An insertion-ordered mapping from symbol to child node.
///
/// Children are enumerated in the order their symbols were first inserted,
/// which is the order `suggest` discovers words in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Children<S> {
    entries: Vec<(S, Node<S>)>,
}

impl<S> Children<S> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Children {
            entries: Vec::new(),
        }
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(symbol, child)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Node<S>)> {
        self.entries.iter().map(|(symbol, node)| (symbol, node))
    }

    /// Iterates over the child symbols in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|(symbol, _)| symbol)
    }
}

impl<S: PartialEq> Children<S> {
    fn position(&self, symbol: &S) -> Option<usize> {
        self.entries.iter().position(|(s, _)| s == symbol)
    }

    /// Returns the child for `symbol`, if any.
    pub fn get(&self, symbol: &S) -> Option<&Node<S>> {
        self.position(symbol).map(|i| &self.entries[i].1)
    }

    pub(crate) fn get_mut(&mut self, symbol: &S) -> Option<&mut Node<S>> {
        match self.position(symbol) {
            Some(i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Returns the child for `symbol`, appending a fresh node if it is missing.
    pub(crate) fn get_or_insert(&mut self, symbol: S) -> &mut Node<S> {
        let index = match self.position(&symbol) {
            Some(i) => i,
            None => {
                self.entries.push((symbol, Node::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }
}

impl<S> Default for Children<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A single symbol position in the trie.
///
/// A node is a word boundary when `is_complete()` is true. It may be a boundary
/// and a branching point at the same time ("cat" inside "catalog").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    pub(crate) complete_word: bool,
    pub(crate) popularity: u64,
    pub(crate) children: Children<S>,
}

impl<S> Node<S> {
    /// Creates a node that is not a word boundary and has never been selected.
    pub fn new() -> Self {
        Node {
            complete_word: false,
            popularity: 0,
            children: Children::new(),
        }
    }

    /// Returns `true` if the path to this node spells an indexed word.
    pub fn is_complete(&self) -> bool {
        self.complete_word
    }

    /// Returns how many times the word ending here has been selected.
    pub fn popularity(&self) -> u64 {
        self.popularity
    }

    /// Returns this node's children.
    pub fn children(&self) -> &Children<S> {
        &self.children
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of complete words in this subtree, this node included.
    pub fn subtree_words(&self) -> usize {
        let mut count = if self.complete_word { 1 } else { 0 };

        for (_, child) in self.children.iter() {
            count += child.subtree_words();
        }

        count
    }

    /// Returns the number of nodes in this subtree, this node included.
    pub fn subtree_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.subtree_nodes())
            .sum::<usize>()
    }
}

impl<S> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}
