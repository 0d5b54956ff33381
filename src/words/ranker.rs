// src/words/ranker.rs
// =============================================================================
// This module turns the raw word counts into the final ordered wordlist.
//
// Ordering: most frequent first; ties are broken alphabetically so the same
// counts always produce the same output (important for reproducible
// wordlists and for testing).
// =============================================================================

use serde::Serialize;
use std::collections::HashMap;

// One entry of the ranked wordlist.
//
// Serialize lets --json print the entries with their counts; the plain
// file output drops the counts and writes words only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

// Sorts the counts into the final wordlist order.
//
// Parameters:
//   counts: the aggregator snapshot (word -> occurrences)
//   max_words: optional cap on how many entries to keep
//
// Example:
//   {"zebra": 3, "apple": 3, "mango": 1} -> [apple, zebra, mango]
//   (descending count, ascending word as tiebreak)
pub fn rank_words(counts: HashMap<String, usize>, max_words: Option<usize>) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = counts
        .into_iter()
        .map(|(word, count)| RankedWord { word, count })
        .collect();

    // Descending by count, then ascending by word for determinism
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    if let Some(max) = max_words {
        ranked.truncate(max);
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, usize)]) -> HashMap<String, usize> {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    fn words(ranked: &[RankedWord]) -> Vec<&str> {
        ranked.iter().map(|entry| entry.word.as_str()).collect()
    }

    #[test]
    fn test_descending_count_with_alphabetical_tiebreak() {
        let ranked = rank_words(counts(&[("zebra", 3), ("apple", 3), ("mango", 1)]), None);
        assert_eq!(words(&ranked), vec!["apple", "zebra", "mango"]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let input = [("zebra", 3), ("apple", 3), ("mango", 1)];
        let first = rank_words(counts(&input), None);
        for _ in 0..10 {
            assert_eq!(rank_words(counts(&input), None), first);
        }
    }

    #[test]
    fn test_truncation() {
        let ranked = rank_words(counts(&[("zebra", 3), ("apple", 3), ("mango", 1)]), Some(2));
        assert_eq!(words(&ranked), vec!["apple", "zebra"]);
    }

    #[test]
    fn test_empty_counts() {
        assert!(rank_words(HashMap::new(), None).is_empty());
        assert!(rank_words(HashMap::new(), Some(5)).is_empty());
    }
}
