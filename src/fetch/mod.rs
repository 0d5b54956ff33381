// src/fetch/mod.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// The crawl engine only sees the `PageFetcher` trait: give it a URL, get
// back the body text or a typed failure. That seam keeps the engine
// testable (tests plug in a stub fetcher with a synthetic site) and keeps
// all retry/timeout policy in one place.
//
// Retry policy (applied internally, invisible to the caller):
// - Up to 5 attempts per URL
// - Retried: transient transport errors and 500/502/503/504 responses
// - Exponential backoff between attempts (1s, 2s, 4s, ...)
// - Every request carries a hard timeout
//
// Rust concepts:
// - Traits: the PageFetcher seam between engine and transport
// - async-trait: async methods on a trait object (Arc<dyn PageFetcher>)
// - thiserror: derives Display/Error for our failure enum
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// How many times a single URL is attempted before giving up.
const MAX_ATTEMPTS: u32 = 5;

/// Server statuses worth retrying; everything else fails immediately.
const RETRY_STATUSES: &[u16] = &[500, 502, 503, 504];

// Why a fetch failed.
//
// One variant per failure mode we can distinguish, so the page processor
// (and verbose logging) can pattern-match instead of string-matching.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("request timed out")]
    Timeout,
    /// Could not resolve hostname
    #[error("could not resolve hostname")]
    Dns,
    /// TCP/TLS connection failed
    #[error("connection failed")]
    Connect,
    /// SSL/TLS certificate error
    #[error("SSL certificate error")]
    Ssl,
    /// Redirect loop / too many redirects
    #[error("too many redirects")]
    TooManyRedirects,
    /// Non-success HTTP status after retries
    #[error("HTTP {0}")]
    Http(u16),
    /// Anything else
    #[error("{0}")]
    Other(String),
}

// The fetch capability consumed by the crawl engine.
//
// Implementations must apply their own retry policy; the engine treats a
// returned error as final for that task.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Real fetcher backed by reqwest.
//
// One HttpFetcher (and therefore one connection pool) is shared by all
// workers of a crawl; Client is cheap to clone internally.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher with a per-request timeout in seconds.
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }

    // One GET attempt, no retries.
    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        response.text().await.map_err(categorize_error)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < MAX_ATTEMPTS && is_retryable(&err) => {
                    // Exponential backoff: 1s after the first failure, then
                    // 2s, 4s, 8s
                    let backoff = Duration::from_secs(1 << (attempt - 1));
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// Transient failures that another attempt might fix.
fn is_retryable(err: &FetchError) -> bool {
    match err {
        FetchError::Timeout | FetchError::Connect | FetchError::Dns => true,
        FetchError::Http(status) => RETRY_STATUSES.contains(status),
        _ => false,
    }
}

// Categorizes different error types from reqwest.
//
// reqwest errors can happen for many reasons: network timeout, DNS
// resolution failure, SSL certificate issues, redirect loops, etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    // Convert error to string once for the substring checks below
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        FetchError::Ssl
    } else {
        FetchError::Other(error_string)
    }
}
