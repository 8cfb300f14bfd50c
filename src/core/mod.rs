//! Core domain types for the guessing game
//!
//! Pure types and the feedback algorithm. Nothing here performs I/O or holds
//! randomness, so every function is deterministic and testable in isolation.

mod attempt;
mod feedback;
mod keyboard;
mod letter;
mod state;
mod word;

pub use attempt::{PLACEHOLDER, Try};
pub use feedback::evaluate;
pub use keyboard::Keyboard;
pub use letter::Letter;
pub use state::LetterState;
pub use word::{Word, WordError};
