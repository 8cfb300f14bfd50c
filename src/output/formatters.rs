//! Formatting utilities for terminal output

use crate::core::{LetterState, Try};
use crate::engine::Round;

/// On-screen keyboard rows (AZERTY)
pub const KEYBOARD_LAYOUT: [&str; 3] = ["azertyuiop", "qsdfghjklm", "wxcvbn"];

/// Emoji for a single cell
#[must_use]
pub const fn state_to_emoji(state: LetterState) -> char {
    match state {
        LetterState::GoodPosition => '🟥',
        LetterState::InWord => '🟡',
        LetterState::NotInWord | LetterState::Unknown => '🟦',
    }
}

/// Format a row's feedback as an emoji string
#[must_use]
pub fn row_to_emoji(row: &Try) -> String {
    row.states().iter().copied().map(state_to_emoji).collect()
}

/// Shareable grid of a round's guesses, one line per guess
#[must_use]
pub fn round_to_emoji(round: &Round) -> String {
    round.tries()[1..]
        .iter()
        .map(row_to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Elapsed time as `MMmSS`
#[must_use]
pub fn format_time(secs: u64) -> String {
    format!("{:02}m{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Limits};
    use crate::core::{Word, evaluate};
    use crate::engine::Engine;

    #[test]
    fn state_emoji() {
        assert_eq!(state_to_emoji(LetterState::GoodPosition), '🟥');
        assert_eq!(state_to_emoji(LetterState::InWord), '🟡');
        assert_eq!(state_to_emoji(LetterState::NotInWord), '🟦');
        assert_eq!(state_to_emoji(LetterState::Unknown), '🟦');
    }

    #[test]
    fn row_emoji() {
        let seed = Try::seed(Word::new("garden").unwrap());
        let row = evaluate(&seed, &Word::new("ginger").unwrap());
        assert_eq!(row_to_emoji(&row), "🟥🟦🟡🟦🟥🟡");
    }

    #[test]
    fn seed_row_emoji() {
        let seed = Try::seed(Word::new("garden").unwrap());
        assert_eq!(row_to_emoji(&seed), "🟥🟦🟦🟦🟦🟦");
    }

    #[test]
    fn round_emoji_skips_seed() {
        let config = Config::build(Limits::default(), ["garden"], ["ginger"]).unwrap();
        let mut engine = Engine::new(config, 1);
        engine.start_new_round();
        engine.submit_guess("ginger");
        engine.submit_guess("garden");

        let round = engine.current().unwrap();
        assert_eq!(round_to_emoji(round), "🟥🟦🟡🟦🟥🟡\n🟥🟥🟥🟥🟥🟥");
    }

    #[test]
    fn time_format() {
        assert_eq!(format_time(0), "00m00");
        assert_eq!(format_time(307), "05m07");
        assert_eq!(format_time(1800), "30m00");
    }

    #[test]
    fn layout_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_LAYOUT.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }
}
