// src/crawler/mod.rs
// =============================================================================
// This module is the concurrent crawl engine.
//
// Submodules:
// - frontier: work queue with dedup, depth bound, and drain detection
// - processor: fetch -> extract -> count -> enqueue for one task
// - worker: the fixed pool of workers draining the frontier
//
// The Crawler struct below ties them together for one crawl invocation:
// it owns the shared state (frontier, word counter), seeds the frontier
// with the target URL at depth 1, runs the pool to completion, and ranks
// the accumulated counts. All state dies with the Crawler - nothing is
// process-global, so crawls are isolated from each other.
// =============================================================================

mod frontier;
mod processor;
mod worker;

// Re-export public items from submodules
pub use frontier::{CrawlTask, Frontier};
pub use processor::PageProcessor;
pub use worker::run_worker_pool;

use crate::config::CrawlConfig;
use crate::fetch::PageFetcher;
use crate::words::{rank_words, RankedWord, Tokenizer, WordCounter};
use std::sync::Arc;

// One website crawl, configured and ready to run.
pub struct Crawler {
    config: CrawlConfig,
    fetcher: Arc<dyn PageFetcher>,
}

impl Crawler {
    // The fetcher is injected rather than built here so tests can crawl a
    // synthetic in-memory site.
    pub fn new(config: CrawlConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    // Runs the crawl to completion and returns the ranked wordlist.
    //
    // Suspends until the frontier is fully drained: every reachable
    // in-scope page within the depth bound has been processed (or skipped
    // after a failed fetch/parse). A crawl where every fetch failed still
    // completes and simply returns an empty list.
    pub async fn run(&self) -> Vec<RankedWord> {
        let frontier = Arc::new(Frontier::new(self.config.max_depth));
        let counter = Arc::new(WordCounter::new());
        let tokenizer = Tokenizer::new(
            self.config.min_word_length,
            self.config.stop_words.clone(),
        );

        let processor = Arc::new(PageProcessor::new(
            Arc::clone(&self.fetcher),
            Arc::clone(&frontier),
            Arc::clone(&counter),
            tokenizer,
            self.config.scope_host.clone(),
            self.config.verbose,
        ));

        // The seed enters at depth 1; max_depth is validated >= 1, so this
        // push always succeeds
        frontier
            .push(self.config.target_url.to_string(), 1)
            .await;

        run_worker_pool(self.config.worker_count, frontier, processor).await;

        // Workers are all gone, so the snapshot is the final state
        rank_words(counter.snapshot().await, self.config.max_words)
    }
}
