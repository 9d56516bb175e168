// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for the knot hash and region counting.
//!
//! Uses proptest to check identities that must hold for all inputs.

mod common;

use common::is_identity_permutation;
use knot_grid::grid::{label_regions, Grid};
use knot_grid::knot::{reverse_cyclic, KnotSolver, LengthSequence};
use knot_grid::{count_regions, knot_hash};
use proptest::prelude::*;

/// A ring length with a valid start offset and count for it.
fn ring_start_count() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..=64).prop_flat_map(|len| (Just(len), 0..len, 0..=len))
}

/// Grids up to 12×12 with arbitrary cells.
fn small_grid() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(rows, width)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), width), rows)
            .prop_map(|cells| Grid::from_rows(cells).unwrap())
    })
}

// =============================================================================
// Cyclic reversal
// =============================================================================

proptest! {
    /// Reversing the same range twice restores the ring.
    #[test]
    fn prop_reverse_is_involution((len, start, count) in ring_start_count()) {
        let original: Vec<usize> = (0..len).collect();
        let mut ring = original.clone();
        reverse_cyclic(&mut ring, start, count);
        reverse_cyclic(&mut ring, start, count);
        prop_assert_eq!(ring, original);
    }

    /// Reversal matches a naive element-by-element swap on the ring.
    #[test]
    fn prop_reverse_matches_naive((len, start, count) in ring_start_count()) {
        let mut expected: Vec<usize> = (0..len).collect();
        for i in 0..count / 2 {
            let a = (start + i) % len;
            let b = (start + count - 1 - i) % len;
            expected.swap(a, b);
        }
        let mut ring: Vec<usize> = (0..len).collect();
        reverse_cyclic(&mut ring, start, count);
        prop_assert_eq!(ring, expected);
    }

    /// Elements outside the reversed range stay put.
    #[test]
    fn prop_reverse_leaves_rest((len, start, count) in ring_start_count()) {
        let mut ring: Vec<usize> = (0..len).collect();
        reverse_cyclic(&mut ring, start, count);
        for offset in count..len {
            let index = (start + offset) % len;
            prop_assert_eq!(ring[index], index);
        }
    }
}

// =============================================================================
// Knot solver
// =============================================================================

proptest! {
    /// Every pass keeps the marks a permutation of 0..=255.
    #[test]
    fn prop_passes_preserve_permutation(key in "[ -~¡-ÿ]{0,24}", passes in 1usize..8) {
        let lengths = LengthSequence::from_key(&key);
        let mut marks: Vec<u8> = (0..=255).collect();
        let mut solver = KnotSolver::new();
        for _ in 0..passes {
            solver.apply_one_pass(&mut marks, lengths.as_slice());
            prop_assert!(is_identity_permutation(&marks));
        }
    }

    /// The hash depends only on the key.
    #[test]
    fn prop_hash_is_deterministic(key in "[ -~]{0,16}") {
        prop_assert_eq!(knot_hash(&key), knot_hash(&key));
    }
}

// =============================================================================
// Regions
// =============================================================================

proptest! {
    /// Labels cover exactly the used squares and agree with the count.
    #[test]
    fn prop_labels_partition_used_squares(grid in small_grid()) {
        let labels = label_regions(&grid);
        prop_assert_eq!(labels.count(), count_regions(&grid));
        prop_assert_eq!(labels.sizes().iter().sum::<usize>(), grid.count_ones());
        prop_assert!(labels.sizes().iter().all(|&size| size > 0));

        for row in 0..grid.rows() {
            for col in 0..grid.width() {
                prop_assert_eq!(labels.region_at(row, col).is_some(), grid.get(row, col));
            }
        }
    }

    /// Edge-adjacent used squares always share a region.
    #[test]
    fn prop_adjacent_used_share_region(grid in small_grid()) {
        let labels = label_regions(&grid);
        for row in 0..grid.rows() {
            for col in 0..grid.width() {
                if !grid.get(row, col) {
                    continue;
                }
                for (r, c) in grid.neighbors(row, col) {
                    if grid.get(r, c) {
                        prop_assert_eq!(labels.region_at(row, col), labels.region_at(r, c));
                    }
                }
            }
        }
    }

    /// Transposing the grid does not change the region count.
    #[test]
    fn prop_transpose_invariant(grid in small_grid()) {
        let mut transposed = Grid::new(grid.width(), grid.rows());
        for row in 0..grid.rows() {
            for col in 0..grid.width() {
                transposed.set(col, row, grid.get(row, col));
            }
        }
        prop_assert_eq!(count_regions(&transposed), count_regions(&grid));
    }
}
