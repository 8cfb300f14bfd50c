//! Game configuration and dictionary
//!
//! A [`Config`] holds the numeric limits of a game together with the ordered
//! list of candidate targets and the set of admissible guesses. It is built
//! once at startup and never changes afterwards.

pub mod file;

use crate::core::Word;
use crate::wordlists::{ADMISSIBLE, SOLUTIONS};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Fatal configuration problems, reported before any engine exists
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no solution word strictly between {min_length} and {max_length} letters")]
    NoSolutions {
        min_length: usize,
        max_length: usize,
    },

    #[error("max tries must be at least 1")]
    NoTries,

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Numeric game settings
///
/// Field names follow the camelCase keys of the JSON game file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Limits {
    pub min_length: usize,
    pub max_length: usize,
    /// Guess budget per round, counting the revealed seed row
    pub max_tries: usize,
    /// Session time limit in seconds, enforced by the front end only
    pub max_time: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_length: 5,
            max_length: 8,
            max_tries: 6,
            max_time: 30 * 60,
        }
    }
}

impl Limits {
    /// Length filter for target words: strict on both ends
    #[must_use]
    pub const fn accepts_solution(&self, len: usize) -> bool {
        self.min_length < len && len < self.max_length
    }

    /// Length filter for admissible guesses: inclusive on both ends
    #[must_use]
    pub const fn accepts_admissible(&self, len: usize) -> bool {
        self.min_length <= len && len <= self.max_length
    }
}

/// Immutable game configuration
#[derive(Debug, Clone)]
pub struct Config {
    limits: Limits,
    solutions: Vec<Word>,
    admissible: FxHashSet<Word>,
}

impl Config {
    /// Build a configuration from raw candidate lists
    ///
    /// Entries that are not words are skipped, the rest are filtered by
    /// length (see [`Limits::accepts_solution`] and
    /// [`Limits::accepts_admissible`]). Every accepted solution is added to the
    /// admissible set.
    ///
    /// # Errors
    /// Returns [`ConfigError::NoSolutions`] when no solution survives filtering
    /// and [`ConfigError::NoTries`] when `max_tries` is zero.
    ///
    /// # Examples
    /// ```
    /// use tomus::config::{Config, Limits};
    ///
    /// let config = Config::build(Limits::default(), ["garden", "cat"], ["gander"]).unwrap();
    /// assert_eq!(config.solutions().len(), 1);
    /// assert!(config.is_admissible("garden"));
    /// assert!(config.is_admissible("gander"));
    /// assert!(!config.is_admissible("cat"));
    /// ```
    pub fn build<I, J>(limits: Limits, solutions: I, admissible: J) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        if limits.max_tries == 0 {
            return Err(ConfigError::NoTries);
        }

        let mut admissible_set: FxHashSet<Word> = FxHashSet::default();
        let mut skipped = 0usize;
        for candidate in admissible {
            match Word::new(candidate.as_ref()) {
                Ok(word) if limits.accepts_admissible(word.len()) => {
                    admissible_set.insert(word);
                }
                Ok(_) => {}
                Err(_) => skipped += 1,
            }
        }

        let mut solution_words = Vec::new();
        for candidate in solutions {
            match Word::new(candidate.as_ref()) {
                Ok(word) if limits.accepts_solution(word.len()) => {
                    admissible_set.insert(word.clone());
                    solution_words.push(word);
                }
                Ok(_) => {}
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!("skipped {skipped} word list entries that are not plain words");
        }

        if solution_words.is_empty() {
            return Err(ConfigError::NoSolutions {
                min_length: limits.min_length,
                max_length: limits.max_length,
            });
        }

        debug!(
            "config built: {} solutions, {} admissible words",
            solution_words.len(),
            admissible_set.len()
        );

        Ok(Self {
            limits,
            solutions: solution_words,
            admissible: admissible_set,
        })
    }

    /// Configuration over the embedded word lists
    ///
    /// # Errors
    /// Fails only if `limits` filter out every embedded solution.
    pub fn embedded(limits: Limits) -> Result<Self, ConfigError> {
        Self::build(limits, SOLUTIONS, ADMISSIBLE)
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.limits.max_tries
    }

    /// Advisory session time limit
    #[must_use]
    pub const fn max_time(&self) -> Duration {
        Duration::from_secs(self.limits.max_time)
    }

    /// Candidate targets, in list order
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn admissible_count(&self) -> usize {
        self.admissible.len()
    }

    /// Exact, case-sensitive membership in the admissible set
    #[must_use]
    pub fn is_admissible(&self, word: &str) -> bool {
        self.admissible.contains(word)
    }

    /// The stored admissible word matching `text`
    #[must_use]
    pub fn admissible_word(&self, text: &str) -> Option<&Word> {
        self.admissible.get(text)
    }
}
