use std::collections::HashSet;

/// A single puzzle: the letters a word may be built from, the letter every
/// word must contain, and the minimum accepted word length.
///
/// The allowed set is deduplicated and lowercased at construction; matching is
/// case-insensitive throughout. The central letter is not required to be a
/// member of the allowed set - callers that pass inconsistent inputs get an
/// empty result, not an error.
#[derive(Debug, Clone)]
pub struct Puzzle {
    allowed: HashSet<char>,
    central: char,
    min_length: usize,
}

impl Puzzle {
    pub fn new(letters: &str, central: char, min_length: usize) -> Self {
        let allowed = letters.to_lowercase().chars().collect();
        Self {
            allowed,
            central: central.to_ascii_lowercase(),
            min_length,
        }
    }

    /// True iff the word meets all three puzzle constraints: minimum length,
    /// contains the central letter, and uses only allowed letters.
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        word.chars().count() >= self.min_length
            && word.contains(self.central)
            && word.chars().all(|c| self.allowed.contains(&c))
    }
}

/// Scan the word bank and collect every word that satisfies the puzzle.
///
/// Pure and deterministic: no I/O, inputs untouched, duplicates in the word
/// bank are preserved. Ordering of the output follows the word bank; sorting
/// is a presentation concern.
pub fn solve_puzzle(wordbank: &[String], puzzle: &Puzzle) -> Vec<String> {
    wordbank
        .iter()
        .filter(|word| puzzle.is_valid_word(word))
        .cloned()
        .collect()
}
