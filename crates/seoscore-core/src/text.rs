//! Text metrics shared by the dimension analyzers.
//!
//! Every function here is total: an empty string yields `0`, and nothing
//! divides. Callers that turn these counts into averages guard their own
//! denominators.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{LetterSet, SyllableAlphabet};

/// Sentence terminator runs (`.`, `!`, `?`, or any mix of them).
static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Number of characters (Unicode scalar values) in `text`.
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of sentences in `text`.
///
/// Splits on runs of `.`, `!` and `?` and drops pieces that are empty or
/// whitespace only, so trailing punctuation never adds a phantom sentence.
pub fn sentence_count(text: &str) -> usize {
    TERMINATORS
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .count()
}

/// Naive syllable estimate: the number of vowel characters in `text`.
///
/// The text is lower-cased, characters outside `alphabet.letters` are
/// dropped, and what remains is counted against `alphabet.vowels`.
pub fn vowel_count(text: &str, alphabet: &SyllableAlphabet) -> usize {
    let vowels: Vec<char> = alphabet.vowels.to_lowercase().chars().collect();
    text.to_lowercase()
        .chars()
        .filter(|c| is_letter(*c, alphabet.letters))
        .filter(|c| vowels.contains(c))
        .count()
}

fn is_letter(c: char, letters: LetterSet) -> bool {
    match letters {
        LetterSet::Ascii => c.is_ascii_lowercase(),
        LetterSet::Unicode => c.is_alphabetic(),
    }
}
