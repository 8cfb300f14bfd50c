//! Text-mode game session
//!
//! Drives the engine from line-based input: one guess per line. Solving a word
//! moves straight to the next one; a lost round, the session timer or `quit`
//! ends the session, and the result can be recorded on the leaderboard.

use crate::config::Config;
use crate::engine::{Engine, Outcome};
use crate::leaderboard::{DEFAULT_CAPACITY, JsonFileStore, Leaderboard, ScoreRecord};
use crate::output::formatters::round_to_emoji;
use crate::output::{print_board, print_history, print_keyboard, print_status};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

/// Options for the `play` command
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Fixed seed for reproducible target selection
    pub seed: Option<u64>,
    /// Leaderboard name; asked interactively when absent
    pub name: Option<String>,
    /// Leaderboard file; results are not recorded when absent
    pub scores: Option<PathBuf>,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Lost,
    TimeUp,
    Quit,
}

/// Totals of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub words_found: usize,
    pub elapsed: Duration,
    pub end: SessionEnd,
}

/// Fill in the fixed first letter when the player typed only the rest
///
/// # Examples
/// ```
/// use tomus::commands::play::complete_guess;
///
/// assert_eq!(complete_guess('g', 6, "ander"), "gander");
/// assert_eq!(complete_guess('g', 6, "Gander"), "gander");
/// ```
#[must_use]
pub fn complete_guess(first: char, target_len: usize, raw: &str) -> String {
    let guess = raw.trim().to_lowercase();
    if guess.chars().count() + 1 == target_len {
        format!("{first}{guess}")
    } else {
        guess
    }
}

/// Run an interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or the leaderboard cannot be
/// updated.
pub fn run_play(config: Config, options: &PlayOptions) -> Result<()> {
    let mut engine = match options.seed {
        Some(seed) => Engine::new(config, seed),
        None => Engine::from_os_rng(config),
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                          T O M U S                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Find the word. Its first letter is given; type the rest or the whole word.");
    println!("  - {} well-placed letter", "red".red().bold());
    println!("  - {} misplaced letter", "yellow".yellow().bold());
    println!("Commands: 'history' to review past words, 'quit' to stop\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let summary = play_session(&mut engine, &mut input)?;

    print_summary(&summary);

    if let Some(path) = &options.scores {
        let name = match &options.name {
            Some(name) => name.clone(),
            None => prompt(&mut input, "Name for the leaderboard (empty to skip)")?,
        };
        if !name.is_empty() {
            record_score(path, &name, &summary)?;
        }
    }

    Ok(())
}

/// Play rounds reading one guess per line from `input`
///
/// The timer starts on the first line read. The session ends on a lost round,
/// when the configured time runs out, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn play_session<R: BufRead>(engine: &mut Engine, input: &mut R) -> Result<SessionSummary> {
    let time_limit = engine.config().max_time();
    let max_tries = engine.config().max_tries();
    let mut started: Option<Instant> = None;

    engine.start_new_round();

    let end = loop {
        let elapsed = started.as_ref().map_or(Duration::ZERO, Instant::elapsed);
        let Some(round) = engine.current() else {
            break SessionEnd::Quit;
        };
        let word_number = engine.history().len() + 1;
        print_status(word_number, engine.score(), elapsed.as_secs());
        print_board(round, max_tries);
        print_keyboard(round.last().letters());

        let Some(line) = read_line(input, "Guess")? else {
            break SessionEnd::Quit;
        };
        let started_at = *started.get_or_insert_with(Instant::now);

        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break SessionEnd::Quit,
            "history" | "h" => {
                print_history(engine.history(), 3);
                continue;
            }
            _ => {}
        }

        let guess = match engine.target() {
            Some(target) => complete_guess(target.first().as_char(), target.len(), &line),
            None => break SessionEnd::Quit,
        };

        let outcome = engine.submit_guess(&guess);
        match outcome {
            Outcome::Win => {
                if let Some(round) = engine.current() {
                    let guesses = round.guesses();
                    let noun = if guesses == 1 { "guess" } else { "guesses" };
                    println!(
                        "\n{} {} in {guesses} {noun}",
                        "✓".green().bold(),
                        round.target().text().to_uppercase().bright_green().bold()
                    );
                    println!("{}", round_to_emoji(round));
                }
                engine.start_new_round();
            }
            Outcome::Lose => {
                if let Some(round) = engine.current() {
                    print_board(round, max_tries);
                    println!(
                        "\n{} The word was {}",
                        "✗".red().bold(),
                        round.target().text().to_uppercase().bright_yellow().bold()
                    );
                }
                break SessionEnd::Lost;
            }
            _ if outcome.is_rejected() => println!("{} {outcome}", "✗".red()),
            _ => {}
        }

        if started_at.elapsed() >= time_limit {
            println!("\n{}", "⏱ Time's up!".bright_red().bold());
            break SessionEnd::TimeUp;
        }
    };

    Ok(SessionSummary {
        score: engine.score(),
        words_found: engine.words_found(),
        elapsed: started.as_ref().map_or(Duration::ZERO, Instant::elapsed),
        end,
    })
}

fn print_summary(summary: &SessionSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  Score: {}   Words found: {}   Time: {}s",
        summary.score.to_string().bright_yellow().bold(),
        summary.words_found.to_string().bright_cyan().bold(),
        summary.elapsed.as_secs()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

fn record_score(path: &Path, name: &str, summary: &SessionSummary) -> Result<()> {
    let mut store = JsonFileStore::new(path);
    let mut board = Leaderboard::open(&store, DEFAULT_CAPACITY)
        .with_context(|| format!("reading leaderboard {}", store.path().display()))?;

    let record = ScoreRecord::new(
        name,
        summary.score,
        summary.words_found,
        summary.elapsed,
        SystemTime::now(),
    );

    match board.insert(record) {
        Some(rank) => {
            board
                .persist(&mut store)
                .with_context(|| format!("writing leaderboard {}", store.path().display()))?;
            info!("recorded {name} at rank {}", rank + 1);
        }
        None => info!("score did not make the top {}", board.capacity()),
    }
    Ok(())
}

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<String> {
    Ok(read_line(input, text)?.unwrap_or_default())
}
