// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The whole pipeline: key in, used squares and region count out.
//!
//! # Examples
//!
//! ```
//! use knot_grid::analyze;
//!
//! let report = analyze("flqrgnkx");
//! assert_eq!(report.used, 8108);
//! assert_eq!(report.regions, 1242);
//! ```

use crate::config::{ConfigError, DefragConfig};
use crate::grid::{build_grid_with, AssembledGrid, RegionCounter};
use crate::knot::KnotHasher;
use crate::statistics::{Counters, Statistics};
use std::fmt;

/// The two numbers a disk analysis produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiskReport {
    /// Used squares across the grid.
    pub used: usize,
    /// 4-connected regions of used squares.
    pub regions: usize,
}

impl fmt::Display for DiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "used squares: {}, regions: {}", self.used, self.regions)
    }
}

/// Analyse the canonical 128-row grid for `key`.
///
/// # Panics
///
/// Panics if `key` holds a character above U+0100; the knot hash has no
/// length for it.
pub fn analyze(key: &str) -> DiskReport {
    run(key, &DefragConfig::default(), &mut Statistics::new())
}

/// Analyse with explicit parameters.
pub fn analyze_with(key: &str, config: &DefragConfig) -> Result<DiskReport, ConfigError> {
    analyze_with_stats(key, config, &mut Statistics::new())
}

/// Analyse with explicit parameters, adding to `stats` as it goes.
pub fn analyze_with_stats(
    key: &str,
    config: &DefragConfig,
    stats: &mut Statistics,
) -> Result<DiskReport, ConfigError> {
    config.validate()?;
    Ok(run(key, config, stats))
}

fn run(key: &str, config: &DefragConfig, stats: &mut Statistics) -> DiskReport {
    let mut hasher = KnotHasher::with_rounds(config.rounds);
    let AssembledGrid { grid, used } = build_grid_with(&mut hasher, key, config.rows);
    stats.add(Counters::RowsHashed, grid.rows());
    stats.add(Counters::BitsSet, used);

    let mut counter = RegionCounter::new();
    let regions = counter.count(&grid);
    stats.add(Counters::CellsVisited, counter.visited_cells());
    stats.add(Counters::RegionsFound, regions);

    DiskReport { used, regions }
}
