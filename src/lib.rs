//! Tomus
//!
//! A Motus-style word guessing engine: the first letter of a hidden word is
//! revealed and the player has a fixed number of tries to find the rest, with
//! duplicate-aware per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use tomus::config::{Config, Limits};
//! use tomus::core::LetterState;
//! use tomus::engine::{Engine, Outcome};
//!
//! let config = Config::build(Limits::default(), ["garden"], ["ginger"]).unwrap();
//! let mut engine = Engine::new(config, 1);
//!
//! engine.start_new_round();
//! assert_eq!(engine.submit_guess("ginger"), Outcome::Valid);
//!
//! let row = engine.current_round().last().unwrap();
//! assert_eq!(row.states()[4], LetterState::GoodPosition);
//! ```

// Letters, words and feedback
pub mod core;

// Limits and dictionaries
pub mod config;

// Round lifecycle and scoring
pub mod engine;

// Score records
pub mod leaderboard;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
