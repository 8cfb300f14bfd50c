//! Per-guess feedback computation
//!
//! Feedback is folded over the round: each new [`Try`] starts from the
//! keyboard and best-state knowledge of the previous one and only ever raises
//! it.

use super::{LetterState, Try, Word};

/// Compute the feedback row for `guess`, carrying knowledge from `previous`
///
/// `previous` is the last row of the current round (the seed for the first
/// guess). `guess` must have the same length as the target; the engine checks
/// that, along with the fixed first letter and admissibility, before calling.
///
/// # Algorithm
/// 1. First pass: every exact match becomes `GoodPosition`, on the row, on the
///    keyboard and in the best states.
/// 2. Second pass, left to right over the remaining positions: a letter
///    already known to be absent is skipped. Otherwise, if the target has
///    more copies of the letter than this guess has already claimed (exact
///    matches anywhere plus `InWord` marks to the left), the position becomes
///    `InWord`. A letter the target does not contain becomes `NotInWord` on
///    the keyboard.
///
/// Exact matches claim the letter budget before any `InWord` mark, so a
/// repeated letter is never marked more often than the target contains it.
///
/// # Examples
/// ```
/// use tomus::core::{evaluate, LetterState, Try, Word};
///
/// let target = Word::new("allot").unwrap();
/// let seed = Try::seed(target);
/// let row = evaluate(&seed, &Word::new("allll").unwrap());
///
/// use LetterState::{GoodPosition as G, Unknown as U};
/// assert_eq!(row.states(), &[G, G, G, U, U]);
/// ```
#[must_use]
pub fn evaluate(previous: &Try, guess: &Word) -> Try {
    let target = previous.word();
    debug_assert_eq!(
        target.len(),
        guess.len(),
        "guess length must match target"
    );

    let mut states = vec![LetterState::Unknown; target.len()];
    let mut best_states = previous.best_states.clone();
    let mut letters = previous.letters;

    // First pass: exact matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            states[i] = LetterState::GoodPosition;
            letters.upgrade(g, LetterState::GoodPosition);
            best_states[i] = LetterState::GoodPosition;
        }
    }

    // Second pass: present elsewhere, bounded by the target's letter count
    for (i, &g) in guess.letters().iter().enumerate() {
        if states[i] == LetterState::GoodPosition || letters[g] == LetterState::NotInWord {
            continue;
        }

        let in_target = target.count_of(g);
        let claimed = guess
            .letters()
            .iter()
            .zip(&states)
            .filter(|&(&l, &s)| l == g && s.is_placed())
            .count();

        if in_target == 0 {
            letters.upgrade(g, LetterState::NotInWord);
        } else if in_target > claimed {
            states[i] = LetterState::InWord;
            letters.upgrade(g, LetterState::InWord);
            best_states[i] = best_states[i].upgrade(LetterState::InWord);
        }
    }

    Try {
        word: target.clone(),
        input: guess.text().to_string(),
        states,
        best_states,
        letters,
    }
}
