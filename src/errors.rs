// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for contract violations.
//!
//! None of these can be triggered through the canonical pipeline: every index
//! it produces is in range by construction. They exist for callers that build
//! lists and grids by hand and use the `try_*` entry points.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// A broken precondition in one of the core algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum InvariantViolation {
    /// Reversal start offset is not inside the list.
    #[error("reverse start {start} out of range for list of length {len}")]
    StartOutOfRange { start: usize, len: usize },

    /// Reversal count (or knot length) exceeds the list length.
    #[error("count {count} exceeds list length {len}")]
    CountTooLarge { count: usize, len: usize },

    /// Knot solver was handed an empty working list.
    #[error("working list is empty")]
    EmptyList,

    /// Grid coordinate outside the grid dimensions.
    #[error("cell ({row}, {col}) outside {rows}x{width} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        width: usize,
    },

    /// Grid rows of differing widths.
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRows {
        row: usize,
        width: usize,
        expected: usize,
    },

    /// Hex digest text of the wrong length.
    #[error("digest text has {len} digits, expected {expected}")]
    DigestLength { len: usize, expected: usize },

    /// Character that is not a hex digit.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    /// Grid text character that is neither `#` nor `.`.
    #[error("invalid grid glyph {glyph:?} at row {row}, column {col}")]
    InvalidGlyph { glyph: char, row: usize, col: usize },
}
