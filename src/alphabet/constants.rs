// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for alphabets and permutation pools.

/// Largest alphabet we can spell with the upper-case ASCII letters.
pub const MAX_LETTERS: usize = 26;

/// Default cap on the letter count accepted by an assembly.
///
/// Each assembly step scans the whole remaining pool, so the work grows
/// roughly as (N!)^2. At 8 letters that is already ~1.6 billion overlap tests.
pub const DEFAULT_MAX_LETTERS: usize = 8;

/// First letter of every alphabet.
pub const FIRST_LETTER: u8 = b'A';

/// Compute factorial at compile time.
///
/// Saturates at `usize::MAX` instead of overflowing, which only happens
/// for alphabets far beyond anything an assembly can process.
pub const fn factorial(n: usize) -> usize {
    let mut result: usize = 1;
    let mut i = 2;
    while i <= n {
        result = match result.checked_mul(i) {
            Some(value) => value,
            None => return usize::MAX,
        };
        i += 1;
    }
    result
}

const _: () = assert!(DEFAULT_MAX_LETTERS <= MAX_LETTERS);
