// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the knot hash and the disk grid.
//!
//! Everything here is derived from three numbers: the working list holds 256
//! marks, the hash runs 64 rounds, and the list is folded in blocks of 16.
//! The grid constants follow from the digest width.

/// Number of marks on the circular working list.
pub const LIST_LEN: usize = 256;

/// Number of rounds applied by a full knot hash.
pub const ROUNDS: usize = 64;

/// Lengths appended to every key before hashing.
pub const LENGTH_SUFFIX: [usize; 5] = [17, 31, 73, 47, 23];

/// Number of consecutive list elements XOR-folded into one digest byte.
pub const BLOCK_LEN: usize = 16;

/// Number of bytes in a dense digest (256 / 16 = 16).
pub const DIGEST_LEN: usize = LIST_LEN / BLOCK_LEN;

/// Length of a digest rendered as lowercase hex.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Bits contributed by one hex digit.
pub const BITS_PER_HEX_DIGIT: usize = 4;

/// Width of a grid row built from one digest (32 hex digits × 4 bits).
pub const ROW_BITS: usize = DIGEST_HEX_LEN * BITS_PER_HEX_DIGIT;

/// Rows in the canonical disk grid.
pub const DEFAULT_ROWS: usize = 128;
