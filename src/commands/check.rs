//! Check command
//!
//! Summarizes a loaded configuration so a game file can be validated without
//! starting a session.

use crate::config::Config;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// What a configuration contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReport {
    pub solutions: usize,
    pub admissible: usize,
    /// (length, solution count), shortest first
    pub lengths: Vec<(usize, usize)>,
    /// (first letter, solution count), alphabetical
    pub first_letters: Vec<(char, usize)>,
}

/// Tally the solutions of `config` by length and first letter
#[must_use]
pub fn check_config(config: &Config) -> ConfigReport {
    let mut lengths: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_letters: FxHashMap<char, usize> = FxHashMap::default();

    for word in config.solutions() {
        *lengths.entry(word.len()).or_insert(0) += 1;
        *first_letters.entry(word.first().as_char()).or_insert(0) += 1;
    }

    let mut lengths: Vec<_> = lengths.into_iter().collect();
    lengths.sort_unstable();
    let mut first_letters: Vec<_> = first_letters.into_iter().collect();
    first_letters.sort_unstable();

    ConfigReport {
        solutions: config.solutions().len(),
        admissible: config.admissible_count(),
        lengths,
        first_letters,
    }
}

pub fn print_config_report(config: &Config, report: &ConfigReport) {
    let limits = config.limits();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CONFIGURATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Solution length:  {} < n < {}",
        limits.min_length, limits.max_length
    );
    println!(
        "  Guess length:     {} ≤ n ≤ {}",
        limits.min_length, limits.max_length
    );
    println!("  Tries per round:  {}", limits.max_tries);
    println!("  Session time:     {}s", limits.max_time);

    println!(
        "\n  Solutions:        {}",
        report.solutions.to_string().bright_green().bold()
    );
    println!(
        "  Admissible words: {}",
        report.admissible.to_string().bright_green().bold()
    );

    println!("\n{}", "By length:".bold());
    let max_count = report.lengths.iter().map(|&(_, c)| c).max().unwrap_or(1);
    for &(len, count) in &report.lengths {
        let bar = "█".repeat((count * 40) / max_count);
        println!("  {len:>2} letters: {count:>5} {}", bar.cyan());
    }

    println!("\n{}", "By first letter:".bold());
    let letters: Vec<String> = report
        .first_letters
        .iter()
        .map(|(letter, count)| format!("{}:{count}", letter.to_ascii_uppercase()))
        .collect();
    println!("  {}", letters.join("  "));
}
