// src/crawler/processor.rs
// =============================================================================
// This module processes one crawl task end to end:
//
//   fetch the page -> extract text and links -> tokenize and count words
//   -> enqueue same-host children one level deeper
//
// Failure policy: a failed fetch or parse kills THIS task only. We log it
// when verbose and move on; the rest of the crawl is unaffected. Nothing
// here ever panics the worker or aborts the pool.
// =============================================================================

use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::extract::extract_page;
use crate::fetch::PageFetcher;
use crate::words::{Tokenizer, WordCounter};
use colored::Colorize;
use std::sync::Arc;
use url::Url;

// Processes tasks against the shared crawl state.
//
// One PageProcessor is shared by every worker of a crawl; all of its
// fields are either read-only or internally synchronized.
pub struct PageProcessor {
    fetcher: Arc<dyn PageFetcher>,
    frontier: Arc<Frontier>,
    counter: Arc<WordCounter>,
    tokenizer: Tokenizer,
    /// Host the crawl is restricted to, taken from the seed URL
    scope_host: String,
    verbose: bool,
}

impl PageProcessor {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        frontier: Arc<Frontier>,
        counter: Arc<WordCounter>,
        tokenizer: Tokenizer,
        scope_host: String,
        verbose: bool,
    ) -> Self {
        Self {
            fetcher,
            frontier,
            counter,
            tokenizer,
            scope_host,
            verbose,
        }
    }

    // Handles one task. The URL was already marked visited when the task
    // was enqueued, so no re-check happens here.
    pub async fn process(&self, task: &CrawlTask) {
        if self.verbose {
            println!(
                "{}",
                format!("Spidering: {} (depth {})", task.url, task.depth).blue()
            );
        }

        // Fetch; the fetcher already retried internally, so an error here
        // is final for this task
        let body = match self.fetcher.fetch(&task.url).await {
            Ok(body) => body,
            Err(err) => {
                if self.verbose {
                    eprintln!("{}", format!("Error fetching {}: {}", task.url, err).yellow());
                }
                return;
            }
        };

        // Parse out text and links
        let content = match extract_page(&body, &task.url) {
            Ok(content) => content,
            Err(err) => {
                if self.verbose {
                    eprintln!("{}", format!("Error parsing {}: {}", task.url, err).yellow());
                }
                return;
            }
        };

        // Count this page's qualifying words
        self.counter
            .add_all(self.tokenizer.tokenize(&content.text))
            .await;

        // Enqueue children one level deeper. The frontier rejects
        // over-depth and already-visited URLs, so we only filter by host.
        for link in content.links {
            if self.in_scope(&link) {
                self.frontier.push(link, task.depth + 1).await;
            }
        }
    }

    // True when the link's host matches the crawl's domain scope.
    fn in_scope(&self, url: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(|host| host == self.scope_host))
            .unwrap_or(false)
    }
}
