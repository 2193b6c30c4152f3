// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Assembly configuration.
//!
//! The binary builds an [`AssemblyConfig`] from its command line; library
//! callers build one directly. Either way it is validated into an
//! [`Alphabet`] before any work starts.

use crate::alphabet::{Alphabet, DEFAULT_MAX_LETTERS, MAX_LETTERS};
use crate::error::AssemblyError;

/// What to assemble, and how large an assembly to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Alphabet size N.
    pub letters: usize,
    /// Largest N accepted. Work grows roughly as (N!)^2.
    pub max_letters: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            letters: 4,
            max_letters: DEFAULT_MAX_LETTERS,
        }
    }
}

impl AssemblyConfig {
    pub fn new(letters: usize) -> Self {
        Self {
            letters,
            ..Self::default()
        }
    }

    pub fn with_max_letters(mut self, max_letters: usize) -> Self {
        self.max_letters = max_letters;
        self
    }

    /// Check the letter count and build the alphabet.
    ///
    /// Checks run in order: a positive count, the 26-letter alphabet limit,
    /// then the configured cap.
    pub fn validate(&self) -> Result<Alphabet, AssemblyError> {
        if self.letters == 0 {
            return Err(AssemblyError::InvalidLetterCount { letters: 0 });
        }
        if self.letters > MAX_LETTERS {
            return Err(AssemblyError::TooManyLetters {
                letters: self.letters,
                max: MAX_LETTERS,
            });
        }
        if self.letters > self.max_letters {
            return Err(AssemblyError::LetterCountAboveCap {
                letters: self.letters,
                cap: self.max_letters,
            });
        }
        Alphabet::new(self.letters)
    }
}

/// Parse a letter count given as text.
///
/// Surrounding whitespace is ignored. Negative and zero counts parse but are
/// rejected as [`AssemblyError::InvalidLetterCount`].
pub fn parse_letters(input: &str) -> Result<usize, AssemblyError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| AssemblyError::NotANumber {
        input: input.to_string(),
    })?;
    if value <= 0 {
        return Err(AssemblyError::InvalidLetterCount { letters: value });
    }
    usize::try_from(value).map_err(|_| AssemblyError::NotANumber {
        input: input.to_string(),
    })
}
