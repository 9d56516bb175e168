// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The disk grid.
//!
//! - `matrix`: the packed boolean grid, with `#`/`.` text form
//! - `assembler`: builds a grid from per-row knot hashes of a key
//! - `regions`: counts and labels 4-connected regions of used squares

pub mod assembler;
pub mod matrix;
pub mod regions;

// Re-export for convenience
pub use assembler::{build_grid, build_grid_with, expand_hex, row_key, AssembledGrid};
pub use matrix::Grid;
pub use regions::{count_regions, label_regions, RegionCounter, RegionLabels};
