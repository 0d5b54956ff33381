// src/output/mod.rs
// =============================================================================
// This module writes the finished wordlist out.
//
// Two sinks, mirroring the --json flag:
// - Plain file: one word per line, counts dropped - the format password
//   and fuzzing tools expect
// - JSON on stdout: the ranked {word, count} entries, for piping into
//   other tooling
// =============================================================================

use crate::words::RankedWord;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

// Writes one word per line to the output file, most frequent first.
pub fn save_wordlist(path: &Path, entries: &[RankedWord]) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    for entry in entries {
        writeln!(file, "{}", entry.word)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    Ok(())
}

// Prints the ranked entries (with counts) as pretty JSON on stdout.
pub fn print_json(entries: &[RankedWord]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    println!("{}", json);
    Ok(())
}

// Prints the colored completion summary.
pub fn print_summary(path: &Path, word_count: usize) {
    println!(
        "[+] Saved wordlist to {}, counting {} words.",
        path.display().to_string().green(),
        word_count.to_string().green()
    );
}
