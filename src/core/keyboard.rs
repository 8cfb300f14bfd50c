//! Keyboard-wide letter knowledge
//!
//! Fixed 26-slot table indexed by [`Letter`].

use super::{Letter, LetterState};
use std::ops::Index;

/// Aggregated state of every letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keyboard {
    states: [LetterState; Letter::COUNT],
}

impl Keyboard {
    /// Every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, letter: Letter) -> LetterState {
        self.states[letter.index()]
    }

    /// Raise the state of `letter` to at least `state`
    #[inline]
    pub fn upgrade(&mut self, letter: Letter, state: LetterState) {
        let slot = &mut self.states[letter.index()];
        *slot = slot.upgrade(state);
    }
}

impl Index<Letter> for Keyboard {
    type Output = LetterState;

    fn index(&self, letter: Letter) -> &Self::Output {
        &self.states[letter.index()]
    }
}
