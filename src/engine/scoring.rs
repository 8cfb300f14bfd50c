//! Round scoring
//!
//! Faster solves earn more; a round that is lost or abandoned earns nothing.

use super::RoundStatus;

/// Points for a solve, indexed by guesses used after the seed row (1-5)
pub const ROUND_SCORES: [u32; 5] = [250, 200, 150, 75, 50];

/// Points for a round solved in `guesses` guesses
///
/// # Examples
/// ```
/// use tomus::engine::round_score;
///
/// assert_eq!(round_score(1), 250);
/// assert_eq!(round_score(5), 50);
/// assert_eq!(round_score(6), 0);
/// ```
#[must_use]
pub fn round_score(guesses: usize) -> u32 {
    match guesses {
        1..=5 => ROUND_SCORES[guesses - 1],
        _ => 0,
    }
}

/// Points a finished round adds to the running total
#[must_use]
pub fn score_for(status: RoundStatus, guesses: usize) -> u32 {
    match status {
        RoundStatus::Won => round_score(guesses),
        RoundStatus::Lost | RoundStatus::InProgress => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table() {
        assert_eq!(round_score(1), 250);
        assert_eq!(round_score(2), 200);
        assert_eq!(round_score(3), 150);
        assert_eq!(round_score(4), 75);
        assert_eq!(round_score(5), 50);
    }

    #[test]
    fn score_outside_table_is_zero() {
        assert_eq!(round_score(0), 0);
        assert_eq!(round_score(6), 0);
        assert_eq!(round_score(100), 0);
    }

    #[test]
    fn score_decreases_with_guesses() {
        for guesses in 1..5 {
            assert!(round_score(guesses) > round_score(guesses + 1));
        }
    }

    #[test]
    fn only_won_rounds_score() {
        assert_eq!(score_for(RoundStatus::Won, 2), 200);
        assert_eq!(score_for(RoundStatus::Lost, 2), 0);
        assert_eq!(score_for(RoundStatus::InProgress, 2), 0);
    }
}
