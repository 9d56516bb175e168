// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

/// The published example key.
pub const EXAMPLE_KEY: &str = "flqrgnkx";

/// Top-left 8×8 corner of the example grid, as published.
pub const EXAMPLE_CORNER: &str = "\
##.#.#..
.#.#.#.#
....#.#.
#.#.##.#
.##.#...
##..#..#
.#...#..
##.#.##.";

/// True when `marks` holds each of `0..marks.len()` exactly once.
pub fn is_identity_permutation(marks: &[u8]) -> bool {
    let mut seen = vec![false; marks.len()];
    for &mark in marks {
        match seen.get_mut(mark as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
