// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The knot-tying state machine.
//!
//! A [`KnotSolver`] carries two pieces of state across length applications:
//! the `cursor` (where the next reversal starts) and the `skip` (an extra
//! advance that grows by one after every length). Both survive from one round
//! to the next; only [`KnotSolver::run`] resets them.
//!
//! # Examples
//!
//! ```
//! use knot_grid::knot::KnotSolver;
//!
//! let mut marks = [0u8, 1, 2, 3, 4];
//! let mut solver = KnotSolver::new();
//! solver.apply_one_pass(&mut marks, &[3, 4, 1, 5]);
//!
//! assert_eq!(marks, [3, 4, 2, 1, 0]);
//! assert_eq!(solver.cursor(), 4);
//! assert_eq!(solver.skip(), 4);
//! ```

use crate::errors::InvariantViolation;
use crate::knot::reverse::reverse_cyclic;

/// Cursor and skip state for repeated knot passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnotSolver {
    /// Start of the next reversal, always `< list.len()` once a pass has run.
    cursor: usize,
    /// Extra advance applied after each length.
    skip: usize,
}

impl KnotSolver {
    /// Create a solver with cursor and skip at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current skip size.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Apply every length once, in order, carrying cursor and skip forward.
    ///
    /// # Panics
    ///
    /// Panics if `list` is empty or any length exceeds `list.len()`.
    pub fn apply_one_pass<T>(&mut self, list: &mut [T], lengths: &[usize]) {
        if let Err(violation) = self.try_apply_one_pass(list, lengths) {
            panic!("apply_one_pass: {}", violation);
        }
    }

    /// Checked form of [`KnotSolver::apply_one_pass`].
    ///
    /// Lengths are validated before the list is touched, so on error neither
    /// the list nor the solver state has changed.
    pub fn try_apply_one_pass<T>(
        &mut self,
        list: &mut [T],
        lengths: &[usize],
    ) -> Result<(), InvariantViolation> {
        check_lengths(list.len(), lengths)?;
        self.pass(list, lengths);
        Ok(())
    }

    /// Reset the state and apply `rounds` full passes.
    ///
    /// # Panics
    ///
    /// Panics if `list` is empty or any length exceeds `list.len()`.
    pub fn run<T>(&mut self, list: &mut [T], lengths: &[usize], rounds: usize) {
        if let Err(violation) = self.try_run(list, lengths, rounds) {
            panic!("run: {}", violation);
        }
    }

    /// Checked form of [`KnotSolver::run`].
    pub fn try_run<T>(
        &mut self,
        list: &mut [T],
        lengths: &[usize],
        rounds: usize,
    ) -> Result<(), InvariantViolation> {
        check_lengths(list.len(), lengths)?;
        *self = Self::new();
        for _ in 0..rounds {
            self.pass(list, lengths);
        }
        Ok(())
    }

    fn pass<T>(&mut self, list: &mut [T], lengths: &[usize]) {
        let len = list.len();
        for &length in lengths {
            reverse_cyclic(list, self.cursor, length);
            self.cursor = (self.cursor + (length + self.skip) % len) % len;
            self.skip += 1;
        }
    }
}

fn check_lengths(len: usize, lengths: &[usize]) -> Result<(), InvariantViolation> {
    if len == 0 {
        return Err(InvariantViolation::EmptyList);
    }
    match lengths.iter().find(|&&l| l > len) {
        Some(&count) => Err(InvariantViolation::CountTooLarge { count, len }),
        None => Ok(()),
    }
}
