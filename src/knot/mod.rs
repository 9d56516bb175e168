// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The knot hash.
//!
//! This module contains the three layers of the hash, leaf first:
//! - `reverse`: reversal of a sub-range of a circular list
//! - `solver`: repeated reversals with carried cursor and skip
//! - `digest`: length sequences, XOR folding, and hex rendering
//!
//! `constants` holds the fixed sizes shared with the grid.

pub mod constants;
pub mod digest;
pub mod reverse;
pub mod solver;

// Re-export for convenience
pub use constants::*;
pub use digest::{
    dense_hash, knot_hash, knot_hash_hex, try_knot_hash, Digest, KnotHasher, LengthSequence,
};
pub use reverse::{reverse_cyclic, try_reverse_cyclic};
pub use solver::KnotSolver;
