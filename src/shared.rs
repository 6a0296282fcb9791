//! Lock-guarded access to a trie from several threads.
//!
//! `Trie` itself is single-threaded. `SharedTrie` wraps one behind a
//! reader-writer lock: `suggest` and the other read-only queries share the
//! read lock, while `insert`, `populate`, `select` and `delete` take the write
//! lock for their whole duration.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::symbols::{CharSymbols, Symbols};
use crate::trie::Trie;
use crate::Result;

/// A cloneable, thread-safe handle to a single trie.
///
/// Clones share the same underlying trie.
///
/// # Examples
///
/// ```
/// use word_trie::SharedTrie;
///
/// let shared: SharedTrie = SharedTrie::new();
/// let writer = shared.clone();
///
/// std::thread::spawn(move || writer.insert("hello").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.suggest("he"), vec!["hello"]);
/// ```
#[derive(Debug)]
pub struct SharedTrie<C: Symbols = CharSymbols> {
    inner: Arc<RwLock<Trie<C>>>,
}

impl<C: Symbols> SharedTrie<C> {
    /// Creates a handle to a new, empty trie.
    pub fn new() -> Self {
        Self::from_trie(Trie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: Trie<C>) -> Self {
        SharedTrie {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    // Every mutation is checked before it is applied, so a panicking holder
    // cannot leave the trie half-updated and poisoning is safe to ignore.
    fn read(&self) -> RwLockReadGuard<'_, Trie<C>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Trie<C>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Trie::insert`].
    pub fn insert(&self, word: &str) -> Result<()> {
        self.write().insert(word)
    }

    /// See [`Trie::populate`]. The write lock is held for the whole batch.
    pub fn populate<I, W>(&self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.write().populate(words)
    }

    /// See [`Trie::suggest`].
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.read().suggest(prefix)
    }

    /// See [`Trie::select`].
    pub fn select(&self, word: &str) -> Result<()> {
        self.write().select(word)
    }

    /// See [`Trie::delete`].
    pub fn delete(&self, word: &str) -> Result<()> {
        self.write().delete(word)
    }

    /// Returns the number of currently indexed words.
    pub fn word_count(&self) -> usize {
        self.read().word_count()
    }

    /// Returns `true` if `word` is currently indexed.
    pub fn contains(&self, word: &str) -> bool {
        self.read().contains(word)
    }

    /// Runs `f` with shared read access to the trie.
    pub fn with_read<R>(&self, f: impl FnOnce(&Trie<C>) -> R) -> R {
        f(&self.read())
    }

    /// Returns a copy of the trie as it is now.
    pub fn snapshot(&self) -> Trie<C> {
        self.read().clone()
    }
}

impl<C: Symbols> Clone for SharedTrie<C> {
    fn clone(&self) -> Self {
        SharedTrie {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Symbols> Default for SharedTrie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbols> From<Trie<C>> for SharedTrie<C> {
    fn from(trie: Trie<C>) -> Self {
        Self::from_trie(trie)
    }
}
