//! Letter feedback states
//!
//! The variant order encodes precedence, so aggregating knowledge about a
//! cell or a key is `max`.

/// Feedback for a single letter, either at a board position or keyboard-wide
///
/// Ordered `Unknown < NotInWord < InWord < GoodPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterState {
    /// No information yet
    #[default]
    Unknown,
    /// Letter absent from the target, or every occurrence already accounted for
    NotInWord,
    /// Letter present elsewhere in the target
    InWord,
    /// Correct letter in the correct slot
    GoodPosition,
}

impl LetterState {
    /// Keep the more informative of `self` and `other`
    ///
    /// `GoodPosition` is never downgraded.
    ///
    /// # Examples
    /// ```
    /// use tomus::core::LetterState;
    ///
    /// assert_eq!(LetterState::GoodPosition.upgrade(LetterState::InWord), LetterState::GoodPosition);
    /// assert_eq!(LetterState::Unknown.upgrade(LetterState::InWord), LetterState::InWord);
    /// ```
    #[inline]
    #[must_use]
    pub fn upgrade(self, other: Self) -> Self {
        self.max(other)
    }

    /// True for states that claim one occurrence of the letter in the target
    #[inline]
    #[must_use]
    pub const fn is_placed(self) -> bool {
        matches!(self, Self::GoodPosition | Self::InWord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(LetterState::GoodPosition > LetterState::InWord);
        assert!(LetterState::InWord > LetterState::NotInWord);
        assert!(LetterState::NotInWord > LetterState::Unknown);
    }

    #[test]
    fn upgrade_never_downgrades() {
        let all = [
            LetterState::Unknown,
            LetterState::NotInWord,
            LetterState::InWord,
            LetterState::GoodPosition,
        ];
        for a in all {
            for b in all {
                let merged = a.upgrade(b);
                assert!(merged >= a && merged >= b);
            }
        }
    }

    #[test]
    fn placed_states() {
        assert!(LetterState::GoodPosition.is_placed());
        assert!(LetterState::InWord.is_placed());
        assert!(!LetterState::NotInWord.is_placed());
        assert!(!LetterState::Unknown.is_placed());
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(LetterState::default(), LetterState::Unknown);
    }
}
