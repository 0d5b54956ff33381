// src/extract/mod.rs
// =============================================================================
// This module parses fetched HTML into the two things the crawl engine
// needs from a page:
//
// - The visible text (fed to the tokenizer)
// - The hyperlink targets (fed back into the frontier)
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative hrefs against the page's
// own URL, exactly like a browser would. Links come back as absolute
// http/https URLs; filtering them down to the crawl's domain scope is the
// page processor's job, not ours.
// =============================================================================

use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

// Why extraction can fail.
//
// html5ever is error-tolerant, so malformed markup never fails the parse
// itself; what can fail is interpreting the page's own URL, without which
// relative links cannot be resolved.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

// Everything extracted from one page.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// The page's text content, ready for tokenizing
    pub text: String,
    /// Absolute http/https hyperlink targets found on the page
    pub links: Vec<String>,
}

// Extracts text and links from an HTML document.
//
// Parameters:
//   html: the raw page markup
//   base_url: the URL the page was fetched from (for resolving relative links)
//
// Example:
//   html = "<p>Welcome</p><a href='/docs'>Docs</a>"
//   base_url = "https://example.com/"
//   result.text contains "Welcome" and "Docs"
//   result.links = ["https://example.com/docs"]
pub fn extract_page(html: &str, base_url: &str) -> Result<PageContent, ExtractError> {
    let base = Url::parse(base_url)
        .map_err(|_| ExtractError::InvalidBaseUrl(base_url.to_string()))?;

    let document = Html::parse_document(html);

    // Whole-document text, one space between text nodes so words from
    // adjacent elements don't run together
    let text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(&base, href) {
                links.push(absolute_url);
            }
        }
    }

    Ok(PageContent { text, links })
}

// Resolves a link (possibly relative) to an absolute http/https URL.
//
// Returns None for targets the crawler can never fetch: in-page anchors,
// mailto:, tel:, javascript:, and anything that isn't http/https once
// resolved.
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    // Skip anchors and special protocols
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // base.join handles both absolute hrefs and relative ones
    let resolved = base.join(href).ok()?;

    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Some(resolved.to_string())
    } else {
        None
    }
}
