// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting 4-connected regions of used squares.
//!
//! # Algorithm
//!
//! Squares are scanned in row-major order. Each used square that has not been
//! visited starts a new region, which is flooded with an explicit stack:
//!
//! 1. Mark the start visited and push it.
//! 2. Pop a square; push each in-bounds, used, unvisited neighbour (up, down,
//!    left, right), marking it visited as it is pushed.
//! 3. Repeat until the stack is empty, then count one region.
//!
//! Marking on push means no square is ever pushed twice. A flood always runs to
//! completion before the scan moves on. Free squares are never visited.
//!
//! The visited set is a flat bit vector indexed like the grid itself.

use crate::grid::matrix::Grid;
use bitvec::prelude::*;

/// Region counter with reusable scratch space.
#[derive(Debug, Default)]
pub struct RegionCounter {
    visited: BitVec,
    stack: Vec<usize>,
    visited_cells: usize,
}

impl RegionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of maximal 4-connected groups of used squares in `grid`.
    pub fn count(&mut self, grid: &Grid) -> usize {
        let regions = self.scan(grid, |_, _| {});
        log::debug!(
            "[RegionCounter] {} regions over {} visited squares.",
            regions,
            self.visited_cells
        );
        regions
    }

    /// Squares visited by the most recent pass (equal to the used squares).
    pub fn visited_cells(&self) -> usize {
        self.visited_cells
    }

    /// Run one full pass, reporting `(square index, region id)` for each visit.
    fn scan(&mut self, grid: &Grid, mut on_visit: impl FnMut(usize, usize)) -> usize {
        self.visited.clear();
        self.visited.resize(grid.len(), false);
        self.stack.clear();
        self.visited_cells = 0;

        let mut regions = 0;
        for start in grid.used_indices() {
            if self.visited[start] {
                continue;
            }
            self.visited.set(start, true);
            self.stack.push(start);

            while let Some(index) = self.stack.pop() {
                on_visit(index, regions);
                self.visited_cells += 1;

                let (row, col) = grid.coordinates(index);
                for (next_row, next_col) in grid.neighbors(row, col) {
                    let next = grid.index(next_row, next_col);
                    if grid.get(next_row, next_col) && !self.visited[next] {
                        self.visited.set(next, true);
                        self.stack.push(next);
                    }
                }
            }
            regions += 1;
        }
        regions
    }
}

/// Count the 4-connected regions of used squares.
pub fn count_regions(grid: &Grid) -> usize {
    RegionCounter::new().count(grid)
}

/// Region membership of every square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLabels {
    labels: Vec<Option<usize>>,
    sizes: Vec<usize>,
    width: usize,
}

impl RegionLabels {
    /// Number of regions.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Squares in each region, indexed by region id (discovery order).
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Region id of `(row, col)`, or `None` for a free or out-of-range square.
    pub fn region_at(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        let index = row.checked_mul(self.width)?.checked_add(col)?;
        self.labels.get(index).copied().flatten()
    }

    /// Size of the largest region, or 0 when there are none.
    pub fn largest(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

/// Label every used square with the id of its region.
///
/// Region ids are assigned in the order the row-major scan discovers them, so
/// the region containing the first used square is 0.
pub fn label_regions(grid: &Grid) -> RegionLabels {
    let mut labels = vec![None; grid.len()];
    let mut sizes = Vec::new();
    RegionCounter::new().scan(grid, |index, region| {
        labels[index] = Some(region);
        if region == sizes.len() {
            sizes.push(0);
        }
        sizes[region] += 1;
    });
    RegionLabels {
        labels,
        sizes,
        width: grid.width(),
    }
}
