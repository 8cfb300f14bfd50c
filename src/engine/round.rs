//! Round records

use crate::core::{Try, Word};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One play-through on a single target word
///
/// `tries()[0]` is always the seed row; every later entry is a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    tries: Vec<Try>,
    status: RoundStatus,
}

impl Round {
    pub(super) fn new(target: Word) -> Self {
        let seed = Try::seed(target);
        let status = if seed.is_solved() {
            RoundStatus::Won
        } else {
            RoundStatus::InProgress
        };
        Self {
            tries: vec![seed],
            status,
        }
    }

    pub(super) fn push(&mut self, row: Try, status: RoundStatus) {
        self.tries.push(row);
        self.status = status;
    }

    #[must_use]
    pub fn tries(&self) -> &[Try] {
        &self.tries
    }

    /// The most recent row (the seed before any guess)
    #[must_use]
    pub fn last(&self) -> &Try {
        // A round always holds its seed row
        &self.tries[self.tries.len() - 1]
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        self.tries[0].word()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Guesses submitted, not counting the seed row
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.tries.len() - 1
    }

    /// Points this round contributes once archived
    #[must_use]
    pub fn score(&self) -> u32 {
        super::scoring::score_for(self.status, self.guesses())
    }
}
