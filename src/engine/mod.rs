//! Game engine: round lifecycle, history and score
//!
//! The engine owns its [`Config`] and a seeded random source. It performs no
//! I/O; a front end drives it one call at a time.
//!
//! # Protocol
//! 1. [`Engine::start_new_round`] picks a target and reveals its first letter.
//! 2. [`Engine::submit_guess`] until it returns [`Outcome::Win`] or
//!    [`Outcome::Lose`].
//! 3. [`Engine::start_new_round`] again archives the finished round and adds
//!    its points to the score.
//!
//! ```
//! use tomus::config::{Config, Limits};
//! use tomus::engine::{Engine, Outcome};
//!
//! let config = Config::build(Limits::default(), ["garden"], ["gander"]).unwrap();
//! let mut engine = Engine::new(config, 7);
//!
//! engine.start_new_round();
//! assert_eq!(engine.submit_guess("gander"), Outcome::Valid);
//! assert_eq!(engine.submit_guess("garden"), Outcome::Win);
//!
//! engine.start_new_round();
//! assert_eq!(engine.score(), 200);
//! assert_eq!(engine.history().len(), 1);
//! ```

mod round;
mod scoring;

pub use round::{Round, RoundStatus};
pub use scoring::{ROUND_SCORES, round_score, score_for};

use crate::config::Config;
use crate::core::{Try, Word, evaluate};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Guess length differs from the target's
    WrongLength,
    /// Guess does not start with the revealed first letter
    WrongFirstLetter,
    /// Guess is not in the admissible set
    UnknownWord,
    /// Guess accepted, round continues
    Valid,
    /// Guess matched the target
    Win,
    /// Guess budget exhausted
    Lose,
    /// No round in progress: none started yet, or the current one is over
    NotPlaying,
}

impl Outcome {
    /// True when the guess was refused and the round left unchanged
    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(
            self,
            Self::WrongLength | Self::WrongFirstLetter | Self::UnknownWord | Self::NotPlaying
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::WrongLength => "wrong number of letters",
            Self::WrongFirstLetter => "the first letter is fixed",
            Self::UnknownWord => "this word is not in the list",
            Self::Valid => "valid guess",
            Self::Win => "solved",
            Self::Lose => "out of tries",
            Self::NotPlaying => "no round in progress",
        };
        f.write_str(text)
    }
}

/// The guessing engine
pub struct Engine {
    config: Config,
    rng: StdRng,
    score: u32,
    current: Option<Round>,
    history: Vec<Round>,
}

impl Engine {
    /// Create an engine whose target selection is fully determined by `seed`
    #[must_use]
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create an engine seeded from the operating system
    #[must_use]
    pub fn from_os_rng(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            score: 0,
            current: None,
            history: Vec::new(),
        }
    }

    /// Archive the current round, if any, and start a new one
    ///
    /// The archived round adds its points to the score. The new target is drawn
    /// uniformly from the solutions; repeats are allowed.
    pub fn start_new_round(&mut self) {
        if let Some(round) = self.current.take() {
            let points = round.score();
            self.score += points;
            debug!(
                "round {} archived: {:?} after {} guesses, +{points}",
                self.history.len() + 1,
                round.status(),
                round.guesses()
            );
            self.history.push(round);
        }

        let solutions = self.config.solutions();
        let target = solutions[self.rng.random_range(0..solutions.len())].clone();
        debug!(
            "round {} started: {} letters",
            self.history.len() + 1,
            target.len()
        );

        self.current = Some(Round::new(target));
    }

    /// Submit a guess for the current round
    ///
    /// Checks run in order and stop at the first failure: a round must be in
    /// progress, the length must match, the first letter must match, and the
    /// word must be admissible. Rejected guesses leave the round unchanged.
    ///
    /// `Win` and `Lose` end the round but do not archive it; call
    /// [`start_new_round`](Self::start_new_round) to record it.
    pub fn submit_guess(&mut self, text: &str) -> Outcome {
        let Some(round) = self.current.as_mut() else {
            return Outcome::NotPlaying;
        };
        if round.status().is_over() {
            return Outcome::NotPlaying;
        }

        let target = round.target();
        if text.chars().count() != target.len() {
            return Outcome::WrongLength;
        }
        if !text.starts_with(target.first().as_char()) {
            return Outcome::WrongFirstLetter;
        }
        let Some(guess) = self.config.admissible_word(text) else {
            return Outcome::UnknownWord;
        };

        let row = evaluate(round.last(), guess);
        let (status, outcome) = if row.is_solved() {
            (RoundStatus::Won, Outcome::Win)
        } else if round.tries().len() + 1 > self.config.max_tries() {
            (RoundStatus::Lost, Outcome::Lose)
        } else {
            (RoundStatus::InProgress, Outcome::Valid)
        };

        round.push(row, status);
        outcome
    }

    /// Rows of the current round, seed first; empty before the first round
    #[must_use]
    pub fn current_round(&self) -> &[Try] {
        self.current.as_ref().map(Round::tries).unwrap_or_default()
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    /// Target of the current round
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.current.as_ref().map(Round::target)
    }

    /// Archived rounds, oldest first
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Points from archived rounds
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Archived rounds that were solved
    #[must_use]
    pub fn words_found(&self) -> usize {
        self.history
            .iter()
            .filter(|round| round.status() == RoundStatus::Won)
            .count()
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
