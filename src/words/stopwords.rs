// src/words/stopwords.rs
// =============================================================================
// This module loads the stop-word set: common words we never want in the
// generated wordlist ("the", "and", ...).
//
// The set comes from a plain text file with one word per line. If the file
// doesn't exist we warn the user and fall back to a small built-in set, so
// a missing file never stops a crawl.
// =============================================================================

use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;

// The fallback set used when no stop-words file is available.
//
// Deliberately small: the point of the file is to let users grow this list
// without recompiling.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "or", "is", "it", "in", "to", "of", "for", "on", "with", "as", "at", "by",
];

// Loads stop words from a file, one per line.
//
// Parameters:
//   path: the stop-words file (usually "blacklist.txt")
//
// Returns: a HashSet of lower-cased words. Matching against tokens is
// case-insensitive because the tokenizer lower-cases everything first.
//
// Empty lines are skipped so a trailing newline doesn't produce an empty
// "word" that would never match anything anyway.
pub fn load_stop_words(path: &Path) -> HashSet<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect(),
        Err(_) => {
            // Missing or unreadable file - warn on stderr and keep going
            eprintln!(
                "{}",
                "Stop words file not found. Using default stop words.".red()
            );
            DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fallback_on_missing_file() {
        let words = load_stop_words(Path::new("/definitely/not/a/real/file.txt"));
        assert!(words.contains("the"));
        assert!(words.contains("by"));
        assert_eq!(words.len(), DEFAULT_STOP_WORDS.len());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("word_spider_stopwords_test.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "About").unwrap();
        writeln!(file, "testing").unwrap();
        writeln!(file).unwrap();

        let words = load_stop_words(&path);
        std::fs::remove_file(&path).ok();

        // Lower-cased on load, blank line skipped
        assert_eq!(words.len(), 2);
        assert!(words.contains("about"));
        assert!(words.contains("testing"));
    }
}
