// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters describing how each merge grew the sequence. They are kept on the
//! assembler and handed over with the finished assembly.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Every permutation appended after the first.
    Merges,
    /// Merges that added a single character.
    MinimalGrowth,
    /// Merges with no overlap at all (the whole permutation was appended).
    DisjointMerges,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Count one merge that grew the sequence by `growth` characters,
    /// for an alphabet of `letters` letters.
    pub fn record_merge(&mut self, growth: usize, letters: usize) {
        self.increment_counter(Counters::Merges);
        if growth == 1 {
            self.increment_counter(Counters::MinimalGrowth);
        }
        if growth == letters {
            self.increment_counter(Counters::DisjointMerges);
        }
    }

    /// Increment the specified counter by 1.
    fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Every counter with its name, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| (counter.into(), self.get(counter)))
    }
}
