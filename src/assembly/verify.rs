// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force coverage checks for assembled sequences.

use crate::alphabet::{generate_permutations, Alphabet};
use crate::error::AssemblyError;

/// Every permutation of `alphabet` that is not a substring of `sequence`,
/// in generation order.
pub fn missing_permutations(sequence: &str, alphabet: &Alphabet) -> Vec<String> {
    generate_permutations(alphabet)
        .into_iter()
        .filter(|permutation| !sequence.contains(permutation.as_str()))
        .collect()
}

pub fn covers_all_permutations(sequence: &str, alphabet: &Alphabet) -> bool {
    missing_permutations(sequence, alphabet).is_empty()
}

/// Fail with [`AssemblyError::IncompleteSequence`] unless every permutation is covered.
pub fn verify_coverage(sequence: &str, alphabet: &Alphabet) -> Result<(), AssemblyError> {
    let missing = missing_permutations(sequence, alphabet);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AssemblyError::IncompleteSequence { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_superpermutation() {
        let alphabet = Alphabet::new(3).unwrap();
        assert!(covers_all_permutations("ABCABACBA", &alphabet));
        assert!(verify_coverage("ABCABACBA", &alphabet).is_ok());
    }

    #[test]
    fn test_missing_permutations() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(
            missing_permutations("ABCACB", &alphabet),
            vec!["BAC", "CAB", "CBA"]
        );
    }

    #[test]
    fn test_verify_reports_missing() {
        let alphabet = Alphabet::new(2).unwrap();
        assert_eq!(
            verify_coverage("AB", &alphabet),
            Err(AssemblyError::IncompleteSequence {
                missing: vec!["BA".to_string()]
            })
        );
    }
}
