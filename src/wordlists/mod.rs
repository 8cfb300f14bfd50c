//! Word lists for the game
//!
//! Default lists are embedded in the binary; custom lists are read from
//! newline-delimited files through [`loader`].

mod embedded;
pub mod loader;

pub use embedded::{ADMISSIBLE, ADMISSIBLE_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
