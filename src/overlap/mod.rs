// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Suffix/prefix overlap and splicing.
//!
//! Two strings overlap by `k` when the last `k` characters of the first are
//! the first `k` characters of the second. Splicing appends the second string
//! with that shared region written only once:
//!
//! ```
//! use superperm::overlap::{overlap, splice};
//!
//! assert_eq!(overlap("ABCD", "BCDA"), 3);
//! assert_eq!(splice("ABCD", "BCDA"), "ABCDA");
//! ```
//!
//! Lengths are byte lengths. Alphabet strings are ASCII, so bytes and
//! characters coincide; for other text only character boundaries of `second`
//! are considered.

/// Largest `k` such that `first` ends with the first `k` bytes of `second`.
///
/// Candidate lengths are tried from longest to shortest and the first match
/// wins, so the result is always the maximal overlap. No overlap longer than
/// the shorter string is possible, so the scan starts there.
pub fn overlap(first: &str, second: &str) -> usize {
    let longest = first.len().min(second.len());
    (1..=longest)
        .rev()
        .filter(|&k| second.is_char_boundary(k))
        .find(|&k| first.ends_with(&second[..k]))
        .unwrap_or(0)
}

/// Append `next` to `sequence`, writing the overlapping region once.
pub fn splice(sequence: &str, next: &str) -> String {
    let shared = overlap(sequence, next);
    let mut spliced = String::with_capacity(sequence.len() + next.len() - shared);
    spliced.push_str(sequence);
    spliced.push_str(&next[shared..]);
    spliced
}

/// Splice a list of strings together, left to right.
///
/// Each item is overlapped only against the sequence built so far, in list
/// order; no reordering is attempted. An empty list yields an empty string.
pub fn splice_all<S: AsRef<str>>(items: &[S]) -> String {
    let Some((head, rest)) = items.split_first() else {
        return String::new();
    };
    rest.iter()
        .fold(head.as_ref().to_string(), |sequence, item| {
            splice(&sequence, item.as_ref())
        })
}
