// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The greedy assembler.
//!
//! The assembler owns a pool of permutations and the sequence built from them.
//! It has two states:
//!
//! - `Building`: the pool still holds permutations. Each `step()` picks the
//!   pool entry overlapping the sequence tail the most, removes it and splices
//!   it onto the sequence.
//! - `Done`: the pool is empty and the sequence is final.
//!
//! The assembler can be stepped by hand and inspected between steps, or
//! simply `run()` to completion.

use crate::alphabet::{generate_permutations, Alphabet};
use crate::overlap::overlap;
use tracing::{debug, trace};

use super::selector::select_best;
use super::statistics::Statistics;

/// Where the assembler is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    /// Permutations remain in the pool.
    Building,
    /// The pool is exhausted; the sequence is final.
    Done,
}

/// One merge of a permutation onto the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    /// The permutation taken from the pool.
    pub permutation: String,
    /// Characters it shared with the sequence tail.
    pub overlap: usize,
    /// Characters the merge added to the sequence.
    pub growth: usize,
}

/// A finished assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The permutation the sequence started from.
    pub initial: String,
    /// The assembled sequence, containing every permutation as a substring.
    pub sequence: String,
    /// Every merge after the initial permutation, in order.
    pub steps: Vec<MergeStep>,
    pub statistics: Statistics,
}

impl Assembly {
    /// Length of the assembled sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Characters added by each merge, one entry per step.
    pub fn growth(&self) -> Vec<usize> {
        self.steps.iter().map(|step| step.growth).collect()
    }
}

/// Greedy sequence assembler.
#[derive(Debug)]
pub struct Assembler {
    letters: usize,
    pool: Vec<String>,
    initial: String,
    sequence: String,
    steps: Vec<MergeStep>,
    statistics: Statistics,
}

impl Assembler {
    /// Start an assembly over every permutation of `alphabet`.
    ///
    /// The first permutation in generation order is taken as the starting
    /// sequence; the rest form the pool, still in generation order.
    pub fn new(alphabet: &Alphabet) -> Self {
        let mut pool = generate_permutations(alphabet);
        // Never empty: even the empty alphabet has one permutation.
        let initial = pool.remove(0);
        debug!(
            letters = alphabet.len(),
            pool = pool.len(),
            initial = %initial,
            "starting assembly"
        );

        Self {
            letters: alphabet.len(),
            sequence: initial.clone(),
            initial,
            steps: Vec::with_capacity(pool.len()),
            pool,
            statistics: Statistics::new(),
        }
    }

    pub fn state(&self) -> AssemblyState {
        if self.pool.is_empty() {
            AssemblyState::Done
        } else {
            AssemblyState::Building
        }
    }

    /// The sequence assembled so far.
    #[inline]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The permutations still waiting to be merged, in pool order.
    #[inline]
    pub fn remaining(&self) -> &[String] {
        &self.pool
    }

    #[inline]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Merge the best remaining permutation onto the sequence.
    ///
    /// Returns `None` once the assembler is `Done`.
    pub fn step(&mut self) -> Option<&MergeStep> {
        let index = select_best(&self.sequence, &self.pool)?;
        // Vec::remove keeps the rest of the pool in order, which fixes the tie-break.
        let permutation = self.pool.remove(index);

        let shared = overlap(&self.sequence, &permutation);
        let old_len = self.sequence.len();
        self.sequence.push_str(&permutation[shared..]);
        let growth = self.sequence.len() - old_len;

        trace!(permutation = %permutation, overlap = shared, growth, "merged");
        self.statistics.record_merge(growth, self.letters);
        self.steps.push(MergeStep {
            permutation,
            overlap: shared,
            growth,
        });
        self.steps.last()
    }

    /// Step until the pool is exhausted and return the finished assembly.
    pub fn run(mut self) -> Assembly {
        while self.step().is_some() {}
        self.finish()
    }

    /// Give up the assembly as it stands.
    ///
    /// Only a `Done` assembler yields a sequence containing every permutation.
    pub fn finish(self) -> Assembly {
        debug!(
            length = self.sequence.len(),
            steps = self.steps.len(),
            remaining = self.pool.len(),
            "assembly finished"
        );
        Assembly {
            initial: self.initial,
            sequence: self.sequence,
            steps: self.steps,
            statistics: self.statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler(letters: usize) -> Assembler {
        Assembler::new(&Alphabet::new(letters).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let assembler = assembler(3);
        assert_eq!(assembler.state(), AssemblyState::Building);
        assert_eq!(assembler.sequence(), "ABC");
        assert_eq!(
            assembler.remaining(),
            &["ACB", "BAC", "BCA", "CAB", "CBA"]
        );
    }

    #[test]
    fn test_single_letter_is_done_immediately() {
        let mut assembler = assembler(1);
        assert_eq!(assembler.state(), AssemblyState::Done);
        assert!(assembler.step().is_none());
        let assembly = assembler.run();
        assert_eq!(assembly.sequence, "A");
        assert!(assembly.growth().is_empty());
    }

    #[test]
    fn test_empty_alphabet() {
        let assembly = assembler(0).run();
        assert_eq!(assembly.sequence, "");
        assert!(assembly.steps.is_empty());
    }

    #[test]
    fn test_first_step_three_letters() {
        let mut assembler = assembler(3);
        let step = assembler.step().unwrap().clone();
        // "BCA" is the only candidate overlapping "ABC" by two.
        assert_eq!(
            step,
            MergeStep {
                permutation: "BCA".to_string(),
                overlap: 2,
                growth: 1,
            }
        );
        assert_eq!(assembler.sequence(), "ABCA");
        assert_eq!(assembler.remaining(), &["ACB", "BAC", "CAB", "CBA"]);
    }

    #[test]
    fn test_pool_shrinks_by_one_per_step() {
        let mut assembler = assembler(4);
        let mut expected = assembler.remaining().len();
        while assembler.state() == AssemblyState::Building {
            let before = assembler.sequence().to_string();
            let step = assembler.step().unwrap().clone();
            expected -= 1;
            assert_eq!(assembler.remaining().len(), expected);
            assert!(step.growth >= 1 && step.growth <= 4);
            assert!(assembler.sequence().starts_with(&before));
            assert!(assembler.sequence().ends_with(&step.permutation));
        }
        assert!(assembler.step().is_none());
    }

    #[test]
    fn test_run_three_letters() {
        let assembly = assembler(3).run();
        assert_eq!(assembly.initial, "ABC");
        assert_eq!(assembly.sequence, "ABCABACBA");
        assert_eq!(assembly.growth(), vec![1, 1, 2, 1, 1]);
        assert_eq!(assembly.len(), 9);
    }

    #[test]
    fn test_finish_early() {
        let mut assembler = assembler(3);
        assembler.step();
        let assembly = assembler.finish();
        assert_eq!(assembly.sequence, "ABCA");
        assert_eq!(assembly.steps.len(), 1);
    }
}
