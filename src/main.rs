//! Tomus - CLI
//!
//! Text-mode word guessing game over the embedded word lists or a JSON game
//! file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};
use tomus::{
    commands::{PlayOptions, check_config, print_config_report, run_play, run_scores},
    config::{Config, Limits, file::GameFile},
    output::logger,
};

#[derive(Parser)]
#[command(
    name = "tomus",
    about = "Guess the word from its first letter, Motus style",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON game file (default: embedded word lists)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session in the terminal (default)
    Play {
        /// Seed for reproducible word selection
        #[arg(long)]
        seed: Option<u64>,

        /// Leaderboard file
        #[arg(long, default_value = "scores.json")]
        scores: PathBuf,

        /// Name recorded on the leaderboard (asked at the end if omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Load the configuration and print a summary
    Check,

    /// Show the leaderboard
    Scores {
        /// Leaderboard file
        #[arg(long, default_value = "scores.json")]
        scores: PathBuf,

        /// Number of records to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
}

/// Load the game file given with `--config`, or the embedded lists
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            debug!("loading game file {}", path.display());
            GameFile::load(path)?.into_config()?
        }
        None => Config::embedded(Limits::default())?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or_else(|| Commands::Play {
        seed: None,
        scores: PathBuf::from("scores.json"),
        name: None,
    });

    match command {
        Commands::Play { seed, scores, name } => {
            let config = load_config(cli.config.as_deref())?;
            let options = PlayOptions {
                seed,
                name,
                scores: Some(scores),
            };
            run_play(config, &options)
        }
        Commands::Check => {
            let config = load_config(cli.config.as_deref())?;
            let report = check_config(&config);
            print_config_report(&config, &report);
            Ok(())
        }
        Commands::Scores { scores, limit } => run_scores(&scores, limit),
    }
}
