// src/words/counter.rs
// =============================================================================
// This module holds the shared word -> count accumulator.
//
// Every worker that finishes tokenizing a page adds that page's words here.
// The map lives behind a tokio Mutex so concurrent workers can't lose
// updates; workers add a whole page's words under one lock acquisition
// instead of locking per word (the totals are the same either way because
// increments commute).
//
// The counter lives for exactly one crawl: it is created by the Crawler,
// filled by the workers, and consumed once via snapshot() after the worker
// pool has fully drained.
// =============================================================================

use std::collections::HashMap;
use tokio::sync::Mutex;

// Concurrency-safe word frequency accumulator.
#[derive(Default)]
pub struct WordCounter {
    counts: Mutex<HashMap<String, usize>>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
        }
    }

    // Adds one occurrence of every word in the iterator.
    //
    // Safe under arbitrary concurrent callers: the whole batch is applied
    // under the lock, so no update is ever lost.
    pub async fn add_all<I>(&self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = self.counts.lock().await;
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    // Adds a single occurrence of one word.
    pub async fn increment(&self, word: &str) {
        let mut counts = self.counts.lock().await;
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }

    // Returns a copy of the current counts.
    //
    // Called once the worker pool has finished, so nothing is mutating the
    // map concurrently at read time.
    pub async fn snapshot(&self) -> HashMap<String, usize> {
        self.counts.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_add_all_accumulates() {
        let counter = WordCounter::new();
        counter
            .add_all(vec!["admin".to_string(), "login".to_string(), "admin".to_string()])
            .await;
        counter.add_all(vec!["admin".to_string()]).await;

        let snapshot = counter.snapshot().await;
        assert_eq!(snapshot.get("admin"), Some(&3));
        assert_eq!(snapshot.get("login"), Some(&1));
    }

    #[tokio::test]
    async fn test_no_lost_updates_under_concurrency() {
        let counter = Arc::new(WordCounter::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    counter.increment("shared").await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = counter.snapshot().await;
        assert_eq!(snapshot.get("shared"), Some(&800));
    }
}
