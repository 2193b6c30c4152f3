// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy choice of the next permutation.

use crate::overlap::overlap;

/// Index of the pool entry that overlaps the tail of `sequence` the most.
///
/// Ties go to the earliest entry in pool order. Returns `None` for an empty
/// pool; the assembler never asks once its pool is exhausted.
///
/// ```
/// use superperm::assembly::select_best;
///
/// // "ABC" and "ABD" both overlap "CAB" by two; "ABC" comes first.
/// assert_eq!(select_best("CAB", &["BAC", "ABC", "ABD"]), Some(1));
/// ```
pub fn select_best<S: AsRef<str>>(sequence: &str, pool: &[S]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, candidate) in pool.iter().enumerate() {
        let shared = overlap(sequence, candidate.as_ref());
        if best.map_or(true, |(_, best_shared)| shared > best_shared) {
            best = Some((index, shared));
        }
    }
    best.map(|(index, _)| index)
}
