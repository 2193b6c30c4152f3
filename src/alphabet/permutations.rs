// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation generation.
//!
//! Permutations are produced in lexicographic order over the alphabet, so the
//! pool an assembly starts from is fully deterministic:
//!
//! - N=2: `AB`, `BA`
//! - N=3: `ABC`, `ACB`, `BAC`, `BCA`, `CAB`, `CBA`
//!
//! # Algorithm
//!
//! The classic "next permutation" step, repeated from the sorted alphabet:
//! 1. Find the rightmost position `i` with `current[i] < current[i + 1]`
//! 2. If none exists, the current permutation is the last one
//! 3. Swap `current[i]` with the rightmost element greater than it
//! 4. Reverse everything after position `i`

use super::Alphabet;

/// Generate every permutation of the alphabet, in lexicographic order.
///
/// The empty alphabet has a single permutation, the empty string.
pub fn generate_permutations(alphabet: &Alphabet) -> Vec<String> {
    let expected = alphabet.permutation_count();
    let mut current: Vec<char> = alphabet.letters().to_vec();
    let mut permutations = Vec::with_capacity(expected);

    loop {
        permutations.push(current.iter().collect::<String>());
        if !next_permutation(&mut current) {
            break;
        }
    }

    assert_eq!(
        permutations.len(),
        expected,
        "Expected {} permutations, generated {}",
        expected,
        permutations.len()
    );

    permutations
}

/// Advance `current` to its lexicographic successor in place.
///
/// Returns false, leaving `current` untouched, when it is already the last
/// (descending) arrangement.
fn next_permutation(current: &mut [char]) -> bool {
    if current.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..current.len() - 1)
        .rev()
        .find(|&i| current[i] < current[i + 1])
    else {
        return false;
    };

    // A successor exists at pivot + 1 at least, so this always finds one.
    let successor = (pivot + 1..current.len())
        .rev()
        .find(|&j| current[j] > current[pivot])
        .unwrap_or(pivot + 1);

    current.swap(pivot, successor);
    current[pivot + 1..].reverse();
    true
}
