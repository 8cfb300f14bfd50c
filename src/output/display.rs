//! Display functions for the game board, keyboard and leaderboard

use super::formatters::{KEYBOARD_LAYOUT, format_time, round_to_emoji};
use crate::core::{Keyboard, Letter, LetterState, Try};
use crate::engine::Round;
use crate::leaderboard::ScoreRecord;
use colored::{ColoredString, Colorize};

fn cell(ch: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", ch.to_ascii_uppercase());
    match state {
        LetterState::GoodPosition => text.white().bold().on_red(),
        LetterState::InWord => text.black().bold().on_yellow(),
        LetterState::NotInWord | LetterState::Unknown => text.white(),
    }
}

fn print_row(row: &Try) {
    let line: String = row
        .input()
        .chars()
        .zip(row.states())
        .map(|(ch, &state)| cell(ch, state).to_string())
        .collect();
    println!("  {line}");
}

/// Print the guesses of a round, then the prefilled next row while it is open
pub fn print_board(round: &Round, max_tries: usize) {
    println!();
    for row in &round.tries()[1..] {
        print_row(row);
    }

    if !round.status().is_over() {
        let hint: String = round
            .last()
            .hint()
            .chars()
            .map(|ch| cell(ch, LetterState::Unknown).to_string())
            .collect();
        println!("  {}", hint.bright_cyan());

        let remaining = (max_tries + 1).saturating_sub(round.tries().len());
        let noun = if remaining == 1 { "try" } else { "tries" };
        let left = format!("{remaining} {noun} left");
        println!("  {}", left.bright_black());
    }
}

/// Print the keyboard colored by what is known about each letter
pub fn print_keyboard(keyboard: &Keyboard) {
    println!();
    for (i, row) in KEYBOARD_LAYOUT.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .filter_map(Letter::from_char)
            .map(|letter| {
                let key = letter.as_char().to_ascii_uppercase().to_string();
                let key = match keyboard.get(letter) {
                    LetterState::GoodPosition => key.red().bold(),
                    LetterState::InWord => key.yellow().bold(),
                    LetterState::NotInWord => key.bright_black(),
                    LetterState::Unknown => key.white(),
                };
                key.to_string()
            })
            .collect();
        println!("  {}{}", " ".repeat(i), keys.join(" "));
    }
}

/// One-line session status
pub fn print_status(word_number: usize, score: u32, elapsed_secs: u64) {
    println!(
        "\n{}  {}  {}",
        format!("Word: {word_number}").bright_cyan().bold(),
        format!("Score: {score}").bright_yellow().bold(),
        format!("Timer: {}", format_time(elapsed_secs)).bright_white()
    );
}

/// Print the last `count` archived rounds with their emoji grids
pub fn print_history(history: &[Round], count: usize) {
    let start = history.len().saturating_sub(count);
    for (i, round) in history.iter().enumerate().skip(start) {
        println!(
            "\n  {} {} ({} pts)",
            format!("#{}", i + 1).bright_black(),
            round.target().text().to_uppercase().bold(),
            round.score()
        );
        for line in round_to_emoji(round).lines() {
            println!("    {line}");
        }
    }
}

/// Print the leaderboard table
pub fn print_leaderboard(records: &[ScoreRecord]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if records.is_empty() {
        println!("\n  No scores yet.");
        return;
    }

    println!("\n    #  Name              Score  Words    Time  Date");
    for (i, record) in records.iter().enumerate() {
        let line = format!(
            "  {:>3}  {:<16} {:>6} {:>6} {:>7}  {}",
            i + 1,
            record.name,
            record.score,
            record.word_count,
            format_time(record.time),
            record.date()
        );
        if i == 0 {
            println!("{}", line.bright_yellow().bold());
        } else {
            println!("{line}");
        }
    }
}
