// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot-hash disk grids and their regions.
//!
//! A key string is turned into a 128×128 grid of used and free squares: row `i`
//! holds the 128 bits of the knot hash of `"{key}-{i}"`. The crate reports how
//! many squares are used and how many 4-connected regions they form.
//!
//! # Architecture
//!
//! The implementation is layered, leaf first:
//!
//! ## Knot hash (`knot`)
//!
//! - Cyclic reversal of a sub-range of a ring, wrapping past the end
//! - `KnotSolver` - repeated reversals with a carried cursor and skip size
//! - `Digest` - 256 knotted marks XOR-folded into 16 bytes, shown as hex
//!
//! ## Grid (`grid`)
//!
//! - `Grid` - rows × width bits, packed row-major
//! - Assembly of one row per knot hash, four bits per hex digit
//! - `RegionCounter` - stack-based flood fill over a flat visited bit set
//!
//! ## Pipeline
//!
//! [`analyze`] builds the grid and counts regions in one call;
//! [`analyze_with`] takes a [`DefragConfig`] for other heights or round counts.
//!
//! Everything is a pure function of its inputs. Each row depends only on the key
//! and its index, so rows may be hashed in any order; the region scan finishes
//! each flood before starting the next.
//!
//! # Example
//!
//! ```
//! use knot_grid::{analyze_with, DefragConfig};
//!
//! let report = analyze_with("flqrgnkx", &DefragConfig::default().with_rows(8)).unwrap();
//! assert_eq!(report.used, 534);
//! ```

pub mod config;
pub mod errors;
pub mod grid;
pub mod knot;
pub mod report;
pub mod statistics;

// Re-export commonly used types
pub use config::{ConfigError, DefragConfig};
pub use errors::InvariantViolation;
pub use grid::{build_grid, count_regions, Grid};
pub use knot::{knot_hash, knot_hash_hex, try_knot_hash, Digest};
pub use report::{analyze, analyze_with, analyze_with_stats, DiskReport};
pub use statistics::{Counters, Statistics};
