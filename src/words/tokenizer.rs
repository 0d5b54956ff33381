// src/words/tokenizer.rs
// =============================================================================
// This module turns raw page text into candidate words for the wordlist.
//
// The pipeline for each page:
// 1. Lower-case the whole text
// 2. Pull out maximal runs of word characters (letters, digits, underscore)
// 3. Keep runs that meet the minimum length
// 4. Drop anything in the stop-word set
//
// Duplicates are kept on purpose - every occurrence counts toward the
// word's frequency.
//
// Rust concepts:
// - regex::Regex: compiled once in the constructor, reused for every page
// - Iterators: find_iter/filter/map chain instead of manual loops
// =============================================================================

use regex::Regex;
use std::collections::HashSet;

// Splits page text into qualifying words.
//
// One Tokenizer is built per crawl and shared (it's read-only after
// construction), so the regex is compiled exactly once.
pub struct Tokenizer {
    /// Minimum length a token must have to qualify
    min_word_length: usize,
    /// Lower-cased words that never qualify
    stop_words: HashSet<String>,
    /// Matches maximal \w+ runs: letters, digits, underscore
    word_pattern: Regex,
}

impl Tokenizer {
    // Creates a tokenizer for one crawl.
    //
    // The stop-word set must already be lower-cased (see words::stopwords).
    pub fn new(min_word_length: usize, stop_words: HashSet<String>) -> Self {
        // \w+ is a constant pattern and known to be valid, so unwrap is OK
        // here (a failure would be a programmer error, not bad input)
        let word_pattern = Regex::new(r"\w+").unwrap();

        Self {
            min_word_length,
            stop_words,
            word_pattern,
        }
    }

    // Extracts all qualifying words from a page's text.
    //
    // Example (min length 5, stop words {"about"}):
    //   "The Quick about testing" -> ["quick", "testing"]
    //
    // "the" is too short, "about" is stop-listed despite being long enough,
    // "quick" and "testing" both qualify.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.word_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() >= self.min_word_length)
            .filter(|word| !self.stop_words.contains(*word))
            .map(|word| word.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_length_and_stop_word_filtering() {
        let tokenizer = Tokenizer::new(5, stop_set(&["about"]));
        let tokens = tokenizer.tokenize("The Quick about testing");
        assert_eq!(tokens, vec!["quick", "testing"]);
    }

    #[test]
    fn test_lowercases_input() {
        let tokenizer = Tokenizer::new(3, stop_set(&[]));
        let tokens = tokenizer.tokenize("HELLO World");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let tokenizer = Tokenizer::new(4, stop_set(&[]));
        let tokens = tokenizer.tokenize("admin login admin");
        assert_eq!(tokens, vec!["admin", "login", "admin"]);
    }

    #[test]
    fn test_digits_and_underscore_are_word_characters() {
        let tokenizer = Tokenizer::new(5, stop_set(&[]));
        let tokens = tokenizer.tokenize("user_name pass123 a-b-c");
        assert_eq!(tokens, vec!["user_name", "pass123"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokenizer = Tokenizer::new(4, stop_set(&[]));
        let tokens = tokenizer.tokenize("login,signup;reset-password");
        assert_eq!(tokens, vec!["login", "signup", "reset", "password"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::new(5, stop_set(&[]));
        assert!(tokenizer.tokenize("").is_empty());
    }
}
