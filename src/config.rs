// src/config.rs
// =============================================================================
// This module holds the validated configuration for one crawl.
//
// All validation happens here, before any network activity: a bad depth,
// word length, worker count, or target URL is rejected up front with a
// descriptive error instead of surfacing halfway through a crawl.
//
// CrawlConfig is immutable for the lifetime of the crawl and owned by the
// Crawler, never global - two crawls in the same process (e.g. in tests)
// can't see each other's settings.
// =============================================================================

use anyhow::{anyhow, Result};
use std::collections::HashSet;
use url::Url;

// Settings for a single crawl invocation.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL; the crawl starts here at depth 1
    pub target_url: Url,
    /// Host derived from the seed; link-following never leaves it
    pub scope_host: String,
    /// Inclusive depth bound; 1 means "the seed page only"
    pub max_depth: usize,
    /// Minimum token length for the wordlist
    pub min_word_length: usize,
    /// Optional cap on the final wordlist size
    pub max_words: Option<usize>,
    /// Number of concurrent crawl workers
    pub worker_count: usize,
    /// Print per-page progress and per-task failures
    pub verbose: bool,
    /// Per-request timeout handed to the fetcher, in seconds
    pub timeout_secs: u64,
    /// Lower-cased words excluded from the wordlist
    pub stop_words: HashSet<String>,
}

impl CrawlConfig {
    // Validates and builds the configuration.
    //
    // Returns an error (and the caller aborts before crawling) when:
    // - the URL doesn't parse or has no host
    // - max_depth, min_word_length, or worker_count is zero
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        target_url: &str,
        max_depth: usize,
        min_word_length: usize,
        max_words: Option<usize>,
        worker_count: usize,
        verbose: bool,
        timeout_secs: u64,
        stop_words: HashSet<String>,
    ) -> Result<Self> {
        let target_url = Url::parse(target_url)
            .map_err(|e| anyhow!("Invalid URL '{}': {}", target_url, e))?;

        let scope_host = target_url
            .host_str()
            .ok_or_else(|| anyhow!("URL has no host: {}", target_url))?
            .to_string();

        if max_depth < 1 {
            return Err(anyhow!("Crawl depth must be at least 1, got {}", max_depth));
        }
        if min_word_length < 1 {
            return Err(anyhow!(
                "Minimum word length must be at least 1, got {}",
                min_word_length
            ));
        }
        if worker_count < 1 {
            return Err(anyhow!(
                "Worker count must be at least 1, got {}",
                worker_count
            ));
        }

        Ok(Self {
            target_url,
            scope_host,
            max_depth,
            min_word_length,
            max_words,
            worker_count,
            verbose,
            timeout_secs,
            stop_words,
        })
    }
}

// Ensures user-entered targets are proper URLs.
//
// People type "testphp.vulnweb.com"; the crawler needs
// "http://testphp.vulnweb.com/".
pub fn format_url(url: &str) -> String {
    let mut formatted = url.trim().to_string();
    if !formatted.starts_with("http://") && !formatted.starts_with("https://") {
        formatted = format!("http://{}", formatted);
    }
    if !formatted.ends_with('/') {
        formatted.push('/');
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(url: &str, depth: usize, min_len: usize, workers: usize) -> Result<CrawlConfig> {
        CrawlConfig::new(url, depth, min_len, None, workers, false, 10, HashSet::new())
    }

    #[test]
    fn test_valid_config() {
        let config = build("https://example.com/", 2, 5, 4).unwrap();
        assert_eq!(config.scope_host, "example.com");
        assert_eq!(config.max_depth, 2);
    }

    #[test]
    fn test_rejects_zero_depth() {
        assert!(build("https://example.com/", 0, 5, 1).is_err());
    }

    #[test]
    fn test_rejects_zero_word_length() {
        assert!(build("https://example.com/", 2, 0, 1).is_err());
    }

    #[test]
    fn test_rejects_zero_workers() {
        assert!(build("https://example.com/", 2, 5, 0).is_err());
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(build("not a url", 2, 5, 1).is_err());
    }

    #[test]
    fn test_rejects_url_without_host() {
        assert!(build("data:text/plain,hello", 2, 5, 1).is_err());
    }

    #[test]
    fn test_format_url_adds_scheme_and_slash() {
        assert_eq!(format_url("example.com"), "http://example.com/");
        assert_eq!(format_url("https://example.com"), "https://example.com/");
        assert_eq!(format_url("http://example.com/path"), "http://example.com/path/");
        assert_eq!(format_url("http://example.com/"), "http://example.com/");
    }
}
