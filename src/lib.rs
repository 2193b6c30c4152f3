// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy construction of superpermutation-like sequences.
//!
//! A superpermutation on N letters is a string that contains every
//! permutation of those letters as a contiguous substring. Finding the
//! shortest one is an open problem; this crate builds a short one greedily.
//!
//! # Pipeline
//!
//! 1. **alphabet**: The first N letters and their N! permutations
//! 2. **overlap**: Suffix/prefix overlap between two strings, and splicing
//! 3. **assembly**: Repeatedly append the permutation that overlaps the
//!    sequence tail the most, until none remain
//! 4. **report**: Text rendering of the result and its growth record
//!
//! Everything is deterministic: the pool is kept in generation order and
//! ties go to the earliest candidate, so the same N always gives the same
//! sequence.
//!
//! ```
//! use superperm::assemble;
//!
//! let assembly = assemble(4).unwrap();
//! assert_eq!(assembly.len(), 33);
//! assert_eq!(assembly.growth().len(), 23);
//! ```
//!
//! # References
//!
//! - Houston, R. (2014). "Tackling the Minimal Superpermutation Problem."
//!   <https://arxiv.org/abs/1408.5108>

pub mod alphabet;
pub mod assembly;
pub mod cli;
pub mod config;
pub mod error;
pub mod overlap;
pub mod report;

// Re-export commonly used types
pub use alphabet::{generate_permutations, Alphabet};
pub use assembly::{assemble, assemble_with, select_best, Assembler, Assembly};
pub use config::AssemblyConfig;
pub use error::AssemblyError;
pub use overlap::{overlap, splice, splice_all};
