// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands here - the tool does exactly one thing (crawl a
// site, emit a wordlist), so everything hangs off one Parser struct.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "word-spider",
    version,
    about = "Crawl a website and generate a frequency-ranked wordlist",
    long_about = "word-spider crawls a website within its own domain, up to a bounded link \
                  depth, and produces a wordlist ranked by how often each word appears. \
                  Useful for building custom dictionaries for password audits and fuzzing."
)]
pub struct Cli {
    /// Target URL (e.g., http://example.com)
    ///
    /// Optional: when omitted, interactive mode asks for it
    pub url: Option<String>,

    /// Spidering depth; 1 crawls only the target page itself
    #[arg(short = 'd', long, default_value_t = 2)]
    pub depth: usize,

    /// Minimum word length to include in the wordlist
    #[arg(short = 'm', long, default_value_t = 5)]
    pub min_word_length: usize,

    /// Maximum number of words to include (unlimited when omitted)
    #[arg(short = 'M', long)]
    pub max_words: Option<usize>,

    /// Number of concurrent crawl workers
    #[arg(short = 't', long, default_value_t = 1)]
    pub threads: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Print each crawled page and per-page failures
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Output filename
    #[arg(short = 'o', long, default_value = "wordlist.txt")]
    pub output: String,

    /// Stop-words file, one word per line
    #[arg(long, default_value = "blacklist.txt")]
    pub stop_words: String,

    /// Print the ranked words with their counts as JSON on stdout
    /// instead of writing the wordlist file
    #[arg(long)]
    pub json: bool,

    /// Prompt for all settings interactively
    #[arg(short = 'i', long)]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["word-spider", "http://example.com"]);
        assert_eq!(cli.url.as_deref(), Some("http://example.com"));
        assert_eq!(cli.depth, 2);
        assert_eq!(cli.min_word_length, 5);
        assert_eq!(cli.max_words, None);
        assert_eq!(cli.threads, 1);
        assert_eq!(cli.timeout, 10);
        assert!(!cli.verbose);
        assert_eq!(cli.output, "wordlist.txt");
        assert_eq!(cli.stop_words, "blacklist.txt");
        assert!(!cli.json);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "word-spider",
            "http://example.com",
            "-d",
            "3",
            "-m",
            "6",
            "-M",
            "100",
            "-t",
            "8",
            "--timeout",
            "5",
            "-v",
            "-o",
            "out.txt",
            "--stop-words",
            "stops.txt",
            "--json",
        ]);
        assert_eq!(cli.depth, 3);
        assert_eq!(cli.min_word_length, 6);
        assert_eq!(cli.max_words, Some(100));
        assert_eq!(cli.threads, 8);
        assert_eq!(cli.timeout, 5);
        assert!(cli.verbose);
        assert_eq!(cli.output, "out.txt");
        assert_eq!(cli.stop_words, "stops.txt");
        assert!(cli.json);
    }

    #[test]
    fn test_url_is_optional() {
        let cli = Cli::parse_from(["word-spider", "-i"]);
        assert_eq!(cli.url, None);
        assert!(cli.interactive);
    }
}
