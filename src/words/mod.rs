// src/words/mod.rs
// =============================================================================
// This module contains everything that happens to words after a page has
// been fetched and its text extracted.
//
// Submodules:
// - stopwords: Loads the stop-word set from a file (with a built-in fallback)
// - tokenizer: Splits page text into candidate words
// - counter: Thread-safe word -> count accumulator shared by all workers
// - ranker: Orders the final counts by frequency
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `words::Tokenizer` instead of `words::tokenizer::Tokenizer`.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod counter;
mod ranker;
mod stopwords;
mod tokenizer;

// Re-export public items from submodules
pub use counter::WordCounter;
pub use ranker::{rank_words, RankedWord};
pub use stopwords::{load_stop_words, DEFAULT_STOP_WORDS};
pub use tokenizer::Tokenizer;
