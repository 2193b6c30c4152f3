// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Alphabets and their permutations.
//!
//! An alphabet is the first N upper-case letters, `A`, `B`, `C`, ... in
//! order. It is derived from N alone and never changes once built.
//!
//! ## Module Structure
//!
//! - `constants`: Letter limits and the compile-time `factorial`
//! - `permutations`: The lexicographic permutation generator

pub mod constants;
pub mod permutations;

pub use constants::{factorial, DEFAULT_MAX_LETTERS, MAX_LETTERS};
pub use permutations::generate_permutations;

use crate::error::AssemblyError;
use std::fmt;

/// The ordered letters permutations are drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet of the first `letters` upper-case letters.
    ///
    /// Zero letters is a valid (empty) alphabet; it has exactly one
    /// permutation, the empty string.
    pub fn new(letters: usize) -> Result<Self, AssemblyError> {
        if letters > MAX_LETTERS {
            return Err(AssemblyError::TooManyLetters {
                letters,
                max: MAX_LETTERS,
            });
        }
        let letters = (0..letters as u8)
            .map(|offset| (constants::FIRST_LETTER + offset) as char)
            .collect();
        Ok(Self { letters })
    }

    /// The letters, in alphabet order.
    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of distinct permutations (N!).
    #[inline]
    pub fn permutation_count(&self) -> usize {
        factorial(self.len())
    }

    /// Whether `candidate` uses every letter of this alphabet exactly once.
    pub fn is_permutation(&self, candidate: &str) -> bool {
        let mut seen = [false; MAX_LETTERS];
        let mut count = 0;
        for ch in candidate.chars() {
            let Some(index) = self.letters.iter().position(|&letter| letter == ch) else {
                return false;
            };
            if seen[index] {
                return false;
            }
            seen[index] = true;
            count += 1;
        }
        count == self.len()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_letters() {
        let alphabet = Alphabet::new(4).unwrap();
        assert_eq!(alphabet.letters(), &['A', 'B', 'C', 'D']);
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.to_string(), "ABCD");
    }

    #[test]
    fn test_empty_alphabet() {
        let alphabet = Alphabet::new(0).unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.permutation_count(), 1);
        assert!(alphabet.is_permutation(""));
    }

    #[test]
    fn test_full_alphabet() {
        let alphabet = Alphabet::new(MAX_LETTERS).unwrap();
        assert_eq!(alphabet.letters().last(), Some(&'Z'));
    }

    #[test]
    fn test_too_many_letters() {
        assert_eq!(
            Alphabet::new(27),
            Err(AssemblyError::TooManyLetters {
                letters: 27,
                max: MAX_LETTERS
            })
        );
    }

    #[test]
    fn test_is_permutation() {
        let alphabet = Alphabet::new(3).unwrap();
        assert!(alphabet.is_permutation("CAB"));
        assert!(!alphabet.is_permutation("CA"));
        assert!(!alphabet.is_permutation("CAA"));
        assert!(!alphabet.is_permutation("CABD"));
        assert!(!alphabet.is_permutation("CAD"));
    }
}
