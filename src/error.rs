// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building alphabets and assembling sequences.

use thiserror::Error;

/// Errors that can occur before or after a greedy assembly.
///
/// All of these are reported before any output is produced: the assembly
/// itself is deterministic and has no failure modes once the alphabet is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// The letter count could not be parsed as a non-negative integer.
    #[error("'{input}' is not a letter count")]
    NotANumber { input: String },

    /// An assembly needs at least one letter.
    #[error("letter count must be positive, got {letters}")]
    InvalidLetterCount { letters: i64 },

    /// The alphabet is limited to the upper-case ASCII letters.
    #[error("cannot build an alphabet of {letters} letters (max {max})")]
    TooManyLetters { letters: usize, max: usize },

    /// The configured size cap rejects this letter count.
    ///
    /// The pool holds N! permutations and every step scans the whole pool,
    /// so even modest N are expensive.
    #[error("{letters} letters exceeds the configured cap of {cap}")]
    LetterCountAboveCap { letters: usize, cap: usize },

    /// Verification found permutations that are not substrings of the sequence.
    #[error(
        "sequence is missing {} permutation(s), first: {}",
        .missing.len(),
        .missing.first().map(String::as_str).unwrap_or("")
    )]
    IncompleteSequence { missing: Vec<String> },
}
