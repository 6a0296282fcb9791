mod common;

use std::thread;

use common::DICTIONARY;
use word_trie::{SharedTrie, WordTrie};

#[test]
fn test_concurrent_suggest_and_select() {
    let shared = SharedTrie::from(WordTrie::from_words(DICTIONARY.iter()).unwrap());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let trie = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let results = trie.suggest("piz");
                    assert!(results.iter().any(|w| w == "pizzeria"));
                }
            })
        })
        .collect();

    let writer = {
        let trie = shared.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                trie.select("pizzeria").unwrap();
            }
        })
    };

    for handle in readers {
        handle.join().unwrap();
    }
    writer.join().unwrap();

    assert_eq!(shared.suggest("piz")[0], "pizzeria");
    assert_eq!(shared.with_read(|t| t.popularity("pizzeria")), Some(50));
}

#[test]
fn test_concurrent_inserts() {
    let shared: SharedTrie = SharedTrie::new();

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let trie = shared.clone();
            thread::spawn(move || {
                let words: Vec<String> = (0..25).map(|i| format!("w{}x{}", n, i)).collect();
                trie.populate(&words).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.word_count(), 100);
    assert_eq!(shared.suggest("w2x").len(), 25);
}
