//! Word list loading utilities
//!
//! Lists are plain text, one word per line. Validation and length filtering
//! happen later in [`Config::build`](crate::config::Config::build).

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load the lines of a word list file
///
/// Lines are trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use tomus::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = words_from_lines(&content);
    debug!("read {} entries from {}", words.len(), path.display());

    Ok(words)
}

/// Split newline-delimited text into trimmed, non-blank entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
