//! Word representation
//!
//! A `Word` is a validated, lowercase, non-empty sequence of [`Letter`]s. Unlike
//! classic Wordle the length is not fixed: each round takes its length from the
//! selected target.

use super::Letter;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A lowercase word made of `a`..=`z` letters
///
/// Equality and hashing only look at the text, so a `FxHashSet<Word>` can be
/// queried with a plain `&str`.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII characters
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use tomus::core::Word;
    ///
    /// let word = Word::new("Garden").unwrap();
    /// assert_eq!(word.text(), "garden");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("gar den").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters = text
            .bytes()
            .map(Letter::from_byte)
            .collect::<Option<Vec<_>>>()
            .ok_or(WordError::InvalidCharacters)?;

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: an empty word cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The revealed first letter of the word
    #[inline]
    #[must_use]
    pub fn first(&self) -> Letter {
        self.letters[0]
    }

    /// How many times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("garden").unwrap();
        assert_eq!(word.text(), "garden");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("GARDEN").unwrap();
        assert_eq!(word.text(), "garden");

        let word2 = Word::new("GaRdEn").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("gard3n"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gar-den"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gar den"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_access() {
        let word = Word::new("rabbit").unwrap();
        assert_eq!(word.first().as_char(), 'r');
        assert_eq!(word.letters()[2].as_char(), 'b');
        assert_eq!(word.letters().len(), 6);
    }

    #[test]
    fn word_count_of_duplicates() {
        let word = Word::new("allot").unwrap();
        let l = Letter::from_char('l').unwrap();
        let a = Letter::from_char('a').unwrap();
        let z = Letter::from_char('z').unwrap();

        assert_eq!(word.count_of(l), 2);
        assert_eq!(word.count_of(a), 1);
        assert_eq!(word.count_of(z), 0);
    }

    #[test]
    fn word_set_lookup_by_str() {
        let mut set = FxHashSet::default();
        set.insert(Word::new("garden").unwrap());

        assert!(set.contains("garden"));
        assert!(!set.contains("Garden"));
        assert_eq!(set.get("garden").map(Word::text), Some("garden"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("violin").unwrap();
        assert_eq!(format!("{word}"), "violin");
    }
}
