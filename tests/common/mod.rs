//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use once_cell::sync::Lazy;

const SYLLABLES: [&str; 6] = ["ba", "co", "di", "fu", "ga", "pi"];

const HAND_PICKED: [&str; 16] = [
    "cat", "catalog", "cattle", "can", "dog", "many", "money", "monkey", "multiple",
    "piano", "pize", "pizza", "pizzas", "pizzeria", "pizzicato", "pizzle",
];

/// A sorted, de-duplicated word list in the shape of a system dictionary file.
pub static DICTIONARY: Lazy<Vec<String>> = Lazy::new(|| {
    let mut words: Vec<String> = HAND_PICKED.iter().map(|w| w.to_string()).collect();

    for a in SYLLABLES.iter() {
        words.push(a.to_string());
        for b in SYLLABLES.iter() {
            words.push(format!("{}{}", a, b));
            for c in SYLLABLES.iter() {
                words.push(format!("{}{}{}", a, b, c));
            }
        }
    }

    words.sort();
    words.dedup();
    words
});
