// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Optionally prompt for settings (interactive mode)
// 3. Validate the configuration and run the crawl
// 4. Write the ranked wordlist and print a summary
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl runs many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on the run outcome
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; //      src/cli.rs       - command-line parsing
mod config; //   src/config.rs    - validated crawl configuration
mod crawler; //  src/crawler/     - the concurrent crawl engine
mod extract; //  src/extract/     - HTML text and link extraction
mod fetch; //    src/fetch/       - HTTP fetching with retries
mod output; //   src/output/      - wordlist file and JSON sinks
mod words; //    src/words/       - tokenizing, counting, ranking

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::{format_url, CrawlConfig};
use crawler::Crawler;
use fetch::HttpFetcher;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Configuration or I/O error - report it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let mut cli = Cli::parse();

    print_banner();

    // Interactive mode kicks in on request or when no URL was given
    if cli.interactive || cli.url.is_none() {
        prompt_for_settings(&mut cli)?;
    }

    let raw_url = cli.url.clone().unwrap_or_default();
    if raw_url.is_empty() {
        return Err(anyhow!("No target URL provided"));
    }
    let target_url = format_url(&raw_url);

    // Stop words come from a file with a built-in fallback; a missing file
    // warns but never aborts
    let stop_words = words::load_stop_words(Path::new(&cli.stop_words));

    // Validation happens here, before any network activity
    let config = CrawlConfig::new(
        &target_url,
        cli.depth,
        cli.min_word_length,
        cli.max_words,
        cli.threads,
        cli.verbose,
        cli.timeout,
        stop_words,
    )?;

    println!("[*] Target: {}", config.target_url.as_str().cyan());
    println!(
        "[*] Depth: {} | Min word length: {} | Workers: {}",
        config.max_depth, config.min_word_length, config.worker_count
    );

    let fetcher = Arc::new(HttpFetcher::new(config.timeout_secs)?);
    let crawler = Crawler::new(config, fetcher);
    let ranked = crawler.run().await;

    if cli.json {
        output::print_json(&ranked)?;
    } else {
        let output_path = Path::new(&cli.output);
        output::save_wordlist(output_path, &ranked)?;
        output::print_summary(output_path, ranked.len());
    }

    Ok(0)
}

fn print_banner() {
    println!("{}", "═".repeat(62).cyan());
    println!(
        "{}",
        " word-spider - website wordlist generator ".cyan().bold()
    );
    println!("{}", "═".repeat(62).cyan());
}

// Asks for every setting on stdin, keeping the CLI value (or its default)
// when the user just presses enter.
fn prompt_for_settings(cli: &mut Cli) -> Result<()> {
    println!("{}", "=== Interactive Mode ===".cyan().bold());

    let url = prompt("Enter the target URL (e.g., testphp.vulnweb.com): ")?;
    if !url.is_empty() {
        cli.url = Some(url);
    }

    cli.depth = prompt_or_keep("Spidering depth", cli.depth)?;
    cli.min_word_length = prompt_or_keep("Minimum word length", cli.min_word_length)?;

    let max_words = prompt("Maximum number of words (blank for no limit): ")?;
    cli.max_words = max_words.parse().ok();

    cli.threads = prompt_or_keep("Number of workers", cli.threads)?;

    let verbose = prompt("Enable verbose mode? (y/n): ")?;
    cli.verbose = verbose.eq_ignore_ascii_case("y");

    let output = prompt(&format!("Output filename [{}]: ", cli.output))?;
    if !output.is_empty() {
        cli.output = output;
    }

    Ok(())
}

// Reads one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{}", label.yellow());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

// Prompts for a value, falling back to the current one on a blank line or
// unparseable input.
fn prompt_or_keep<T>(label: &str, current: T) -> Result<T>
where
    T: FromStr + Display + Copy,
{
    let input = prompt(&format!("{} [{}]: ", label, current))?;
    if input.is_empty() {
        return Ok(current);
    }
    Ok(input.parse().ok().unwrap_or(current))
}
