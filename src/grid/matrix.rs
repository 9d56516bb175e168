// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid type for the disk: a rectangular matrix of used/free squares.
//!
//! Cells are packed row-major into a single bit vector, so cell `(row, col)`
//! lives at bit `row * width + col`. A set bit is a used square.
//!
//! # Examples
//!
//! ```
//! use knot_grid::grid::Grid;
//!
//! let grid: Grid = "##.\n.#.\n..#".parse().unwrap();
//! assert_eq!((grid.rows(), grid.width()), (3, 3));
//! assert!(grid.get(1, 1));
//! assert_eq!(grid.count_ones(), 4);
//! assert_eq!(grid.to_string(), "##.\n.#.\n..#");
//! ```

use crate::errors::InvariantViolation;
use crate::grid::assembler::expand_hex;
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Glyph for a used square.
pub const USED: char = '#';
/// Glyph for a free square.
pub const FREE: char = '.';

/// A rectangular boolean grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: BitVec,
    rows: usize,
    width: usize,
}

impl Grid {
    /// Create a grid with every square free.
    pub fn new(rows: usize, width: usize) -> Self {
        Self {
            cells: bitvec![0; rows * width],
            rows,
            width,
        }
    }

    /// Build a grid from rows of booleans.
    ///
    /// All rows must share the width of the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, InvariantViolation> {
        let mut grid = Self::default();
        for row in rows {
            let bits: BitVec = row.into_iter().collect();
            grid.push_row(&bits)?;
        }
        Ok(grid)
    }

    /// Build a grid whose rows are hex strings expanded four bits per digit.
    pub fn from_hex_rows(rows: &[&str]) -> Result<Self, InvariantViolation> {
        let mut grid = Self::default();
        for hex in rows {
            grid.push_row(&expand_hex(hex)?)?;
        }
        Ok(grid)
    }

    /// Append a row. The first row pushed fixes the width.
    pub fn push_row(&mut self, bits: &BitSlice) -> Result<(), InvariantViolation> {
        if self.rows == 0 {
            self.width = bits.len();
        } else if bits.len() != self.width {
            return Err(InvariantViolation::RaggedRows {
                row: self.rows,
                width: bits.len(),
                expected: self.width,
            });
        }
        self.cells.extend_from_bitslice(bits);
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of squares.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of used squares.
    pub fn count_ones(&self) -> usize {
        self.cells.count_ones()
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.width
    }

    /// Value of a square.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.try_get(row, col) {
            Ok(used) => used,
            Err(violation) => panic!("Grid::get: {}", violation),
        }
    }

    /// Value of a square, or an error if `(row, col)` is outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Result<bool, InvariantViolation> {
        if !self.contains(row, col) {
            return Err(InvariantViolation::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                width: self.width,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Mark a square used or free.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, used: bool) {
        assert!(
            self.contains(row, col),
            "Grid::set: cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.rows,
            self.width
        );
        let index = self.index(row, col);
        self.cells.set(index, used);
    }

    /// Bits of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &BitSlice {
        assert!(row < self.rows, "Grid::row: row {} out of range", row);
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// In-bounds squares sharing an edge with `(row, col)`: up, down, left, right.
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = Some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = Some((row, col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |&(r, c)| self.contains(r, c))
    }

    /// The top-left `rows × width` corner, clamped to the grid.
    pub fn crop(&self, rows: usize, width: usize) -> Grid {
        let rows = rows.min(self.rows);
        let width = width.min(self.width);
        let mut cropped = Grid::new(rows, width);
        for row in 0..rows {
            let start = cropped.index(row, 0);
            cropped.cells[start..start + width].copy_from_bitslice(&self.row(row)[..width]);
        }
        cropped
    }

    /// Flat bit index of `(row, col)`; the caller guarantees bounds.
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Coordinates of a flat bit index.
    pub(crate) fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Flat indices of every used square, in row-major order.
    pub(crate) fn used_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter_ones()
    }
}

impl fmt::Display for Grid {
    /// Rows of `#` and `.`, separated by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for used in self.row(row).iter().by_vals() {
                write!(f, "{}", if used { USED } else { FREE })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = InvariantViolation;

    /// Parse rows of `#` and `.`; blank lines and surrounding spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::default();
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let mut bits: BitVec = BitVec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    USED => bits.push(true),
                    FREE => bits.push(false),
                    glyph => {
                        return Err(InvariantViolation::InvalidGlyph {
                            glyph,
                            row: grid.rows(),
                            col,
                        })
                    }
                }
            }
            grid.push_row(&bits)?;
        }
        Ok(grid)
    }
}
