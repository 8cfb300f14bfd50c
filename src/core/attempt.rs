//! A single guess attempt and its feedback

use super::{Keyboard, LetterState, Word};

/// Character shown for cells with no letter yet
pub const PLACEHOLDER: char = '.';

/// One row of the board: a submitted guess and the feedback it produced
///
/// Index 0 of every round is a synthetic seed built with [`Try::seed`]. Every
/// other `Try` comes out of [`evaluate`](super::evaluate) and is never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Try {
    pub(super) word: Word,
    pub(super) input: String,
    pub(super) states: Vec<LetterState>,
    pub(super) best_states: Vec<LetterState>,
    pub(super) letters: Keyboard,
}

impl Try {
    /// Seed row for a round on `word`
    ///
    /// The first letter is revealed and fixed; every other cell is unknown.
    ///
    /// # Examples
    /// ```
    /// use tomus::core::{LetterState, Try, Word};
    ///
    /// let seed = Try::seed(Word::new("garden").unwrap());
    /// assert_eq!(seed.input(), "g.....");
    /// assert_eq!(seed.states()[0], LetterState::GoodPosition);
    /// assert_eq!(seed.states()[1], LetterState::Unknown);
    /// ```
    #[must_use]
    pub fn seed(word: Word) -> Self {
        let len = word.len();

        let mut input = String::with_capacity(len);
        input.push(word.first().as_char());
        input.extend(std::iter::repeat_n(PLACEHOLDER, len - 1));

        let mut states = vec![LetterState::Unknown; len];
        states[0] = LetterState::GoodPosition;

        Self {
            word,
            input,
            best_states: states.clone(),
            states,
            letters: Keyboard::new(),
        }
    }

    /// The round's target word
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The guess as submitted
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Per-position feedback for this guess
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Best state observed at each position so far in the round
    #[must_use]
    pub fn best_states(&self) -> &[LetterState] {
        &self.best_states
    }

    /// Keyboard-wide letter knowledge after this guess
    #[must_use]
    pub fn letters(&self) -> &Keyboard {
        &self.letters
    }

    /// True when every position is `GoodPosition`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::GoodPosition)
    }

    /// Known letters of the target, with [`PLACEHOLDER`] where nothing is fixed
    ///
    /// Used to prefill the next row from prior information.
    #[must_use]
    pub fn hint(&self) -> String {
        self.word
            .letters()
            .iter()
            .zip(&self.best_states)
            .map(|(letter, &state)| {
                if state == LetterState::GoodPosition {
                    letter.as_char()
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }
}
