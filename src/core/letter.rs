//! Restricted alphabet type
//!
//! A `Letter` is one of the 26 lowercase ASCII letters. Keyboard-wide state is
//! keyed by `Letter`, so every lookup goes through [`Letter::index`] instead of
//! raw character arithmetic at the call site.

use std::fmt;

/// A single lowercase ASCII letter (`a`..=`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Build a letter from a byte, accepting only `b'a'..=b'z'`
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Build a letter from a char, accepting only `'a'..='z'`
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
