// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-time parameters for a disk analysis.
//!
//! The defaults reproduce the canonical 128-row grid hashed with 64 rounds.
//! Fixed sizes that cannot vary (list length, block length, digest width) live
//! in [`crate::knot::constants`].
//!
//! # Examples
//!
//! ```
//! use knot_grid::DefragConfig;
//!
//! let config = DefragConfig::default().with_rows(8);
//! assert_eq!(config.rows, 8);
//! assert_eq!(config.rounds, 64);
//! assert!(config.validate().is_ok());
//! ```

use crate::knot::constants::{DEFAULT_ROWS, ROUNDS};
use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("row count must be positive")]
    ZeroRows,

    #[error("round count must be positive")]
    ZeroRounds,
}

/// Grid height and knot-hash round count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefragConfig {
    /// Rows in the grid, one knot hash each.
    pub rows: usize,
    /// Rounds per knot hash.
    pub rounds: usize,
}

impl DefragConfig {
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}

impl Default for DefragConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            rounds: ROUNDS,
        }
    }
}
