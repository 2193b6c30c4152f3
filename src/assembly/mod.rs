// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy assembly of permutation-covering sequences.
//!
//! # Algorithm
//!
//! 1. Generate every permutation of the alphabet (lexicographic order)
//! 2. Take the first one as the starting sequence
//! 3. Repeatedly pick the remaining permutation whose prefix overlaps the
//!    sequence tail the most, remove it and splice it on
//!
//! The result contains every permutation as a substring. It is not
//! guaranteed to be the shortest such string; greedy choices never backtrack.
//!
//! ## Module Structure
//!
//! - `selector`: Maximum-overlap choice with a first-in-pool tie-break
//! - `assembler`: The `Building`/`Done` state machine
//! - `statistics`: Per-merge growth counters
//! - `verify`: Brute-force coverage checks

pub mod assembler;
pub mod selector;
pub mod statistics;
pub mod verify;

pub use assembler::{Assembler, Assembly, AssemblyState, MergeStep};
pub use selector::select_best;
pub use statistics::{Counters, Statistics};
pub use verify::{covers_all_permutations, missing_permutations, verify_coverage};

use crate::config::AssemblyConfig;
use crate::error::AssemblyError;
use tracing::info;

/// Assemble a sequence covering every permutation of the first `letters`
/// letters, using the default size cap.
///
/// ```
/// let assembly = superperm::assemble(3).unwrap();
/// assert_eq!(assembly.sequence, "ABCABACBA");
/// assert_eq!(assembly.growth(), vec![1, 1, 2, 1, 1]);
/// ```
pub fn assemble(letters: usize) -> Result<Assembly, AssemblyError> {
    assemble_with(&AssemblyConfig::new(letters))
}

/// Assemble with an explicit configuration.
pub fn assemble_with(config: &AssemblyConfig) -> Result<Assembly, AssemblyError> {
    let alphabet = config.validate()?;
    info!(
        alphabet = %alphabet,
        permutations = alphabet.permutation_count(),
        "assembling"
    );

    let assembly = Assembler::new(&alphabet).run();

    info!(
        length = assembly.len(),
        merges = assembly.statistics.get(Counters::Merges),
        "assembled"
    );
    Ok(assembly)
}
