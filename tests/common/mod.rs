// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

/// Every permutation of the first `letters` letters, built independently of
/// the crate's generator by recursive insertion.
pub fn brute_force_permutations(letters: usize) -> HashSet<String> {
    let mut result = HashSet::new();
    result.insert(String::new());
    for offset in 0..letters as u8 {
        let letter = (b'A' + offset) as char;
        result = result
            .into_iter()
            .flat_map(|partial: String| {
                (0..=partial.len())
                    .map(|at| {
                        let mut extended = partial.clone();
                        extended.insert(at, letter);
                        extended
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
    }
    result
}

/// Assert that `sequence` contains every permutation of `letters` letters.
pub fn assert_covers_all(sequence: &str, letters: usize) {
    for permutation in brute_force_permutations(letters) {
        assert!(
            sequence.contains(&permutation),
            "{} is missing from {}",
            permutation,
            sequence
        );
    }
}
