//! Examples of using the word trie
use word_trie::{ByteSymbols, Error, Trie, WordTrie};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Build an index from a word list
    let mut trie = WordTrie::new();
    trie.populate(vec!["piano", "pizza", "pizzas", "pizzeria", "dog"])?;
    assert_eq!(trie.word_count(), 5);

    // Suggestions come back in the order the words were first inserted
    assert_eq!(trie.suggest("piz"), vec!["pizza", "pizzas", "pizzeria"]);

    // Selecting a word ranks it first
    trie.select("pizzeria")?;
    assert_eq!(trie.suggest("piz"), vec!["pizzeria", "pizza", "pizzas"]);

    // Deleting unindexes the word but keeps its nodes
    trie.delete("pizzas")?;
    assert_eq!(trie.suggest("piz"), vec!["pizzeria", "pizza"]);
    assert_eq!(trie.delete("pizzas"), Err(Error::NotFound("pizzas".to_string())));

    // Or split words per byte instead of per char
    let bytes = Trie::<ByteSymbols>::from_words(vec!["café", "cafés"])?;
    assert_eq!(bytes.suggest("caf"), vec!["café", "cafés"]);

    Ok(())
}
