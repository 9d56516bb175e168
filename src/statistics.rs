// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered while analysing a disk. Each counter is one slot in a
//! fixed array indexed by [`Counters`].

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Knot hashes computed (one per row).
    RowsHashed,
    /// Used squares in the grid.
    BitsSet,
    /// Squares reached by region floods.
    CellsVisited,
    /// Regions found.
    RegionsFound,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Add `amount` to the specified counter.
    pub(crate) fn add(&mut self, counter: Counters, amount: usize) {
        self.stats[counter as usize] += amount as u64;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
