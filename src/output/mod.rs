//! Terminal output formatting
//!
//! Display utilities for the text-mode front end and its logger.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{print_board, print_history, print_keyboard, print_leaderboard, print_status};
