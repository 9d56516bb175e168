// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Assembly of the disk grid from knot hashes.
//!
//! Row `i` of the grid for key `k` is the knot hash of `"{k}-{i}"`, expanded
//! from hex to bits (four per digit, high bit first). Leading zero digits
//! still contribute four bits each, so every row is [`ROW_BITS`] wide.

use crate::errors::InvariantViolation;
use crate::grid::matrix::Grid;
use crate::knot::constants::{BITS_PER_HEX_DIGIT, ROW_BITS};
use crate::knot::digest::hex_digit_value;
use crate::knot::KnotHasher;
use bitvec::prelude::*;

/// A grid together with its used-square count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledGrid {
    pub grid: Grid,
    /// Set bits across all rows.
    pub used: usize,
}

/// Hash input for one row.
pub fn row_key(key: &str, row: usize) -> String {
    format!("{}-{}", key, row)
}

/// Expand hex text into bits, four per digit, most significant first.
pub fn expand_hex(hex: &str) -> Result<BitVec, InvariantViolation> {
    let mut bits: BitVec = BitVec::with_capacity(hex.len() * BITS_PER_HEX_DIGIT);
    for (position, digit) in hex.chars().enumerate() {
        let nibble = hex_digit_value(digit, position)?;
        bits.extend_from_bitslice(&nibble.view_bits::<Msb0>()[8 - BITS_PER_HEX_DIGIT..]);
    }
    Ok(bits)
}

/// Build the `row_count`-row grid for `key` with the standard knot hash.
pub fn build_grid(key: &str, row_count: usize) -> AssembledGrid {
    build_grid_with(&mut KnotHasher::new(), key, row_count)
}

/// Build the grid using (and reusing) the given hasher.
///
/// # Panics
///
/// Panics if `key` holds a character whose code exceeds
/// [`LIST_LEN`](crate::knot::LIST_LEN).
pub fn build_grid_with(hasher: &mut KnotHasher, key: &str, row_count: usize) -> AssembledGrid {
    match assemble(hasher, key, row_count) {
        Ok(assembled) => assembled,
        Err(violation) => panic!("build_grid: {}", violation),
    }
}

fn assemble(
    hasher: &mut KnotHasher,
    key: &str,
    row_count: usize,
) -> Result<AssembledGrid, InvariantViolation> {
    log::debug!(
        "[GridAssembler] Hashing {} rows for key {:?} ({} rounds)...",
        row_count,
        key,
        hasher.rounds()
    );

    let mut grid = Grid::default();
    let mut used = 0;
    for row in 0..row_count {
        let hex = hasher.try_hash(&row_key(key, row))?.to_hex();
        let bits = expand_hex(&hex)?;
        debug_assert_eq!(bits.len(), ROW_BITS);
        log::trace!("[GridAssembler] row {:3}: {}", row, hex);

        used += bits.count_ones();
        grid.push_row(&bits)?;
    }

    log::debug!(
        "[GridAssembler] Built {}x{} grid, {} squares used.",
        grid.rows(),
        grid.width(),
        used
    );
    Ok(AssembledGrid { grid, used })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key() {
        assert_eq!(row_key("flqrgnkx", 0), "flqrgnkx-0");
        assert_eq!(row_key("flqrgnkx", 127), "flqrgnkx-127");
        assert_eq!(row_key("", 5), "-5");
    }

    #[test]
    fn test_expand_hex_digits() {
        let bits = expand_hex("a0c2017").unwrap();
        let text: String = bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect();
        assert_eq!(text, "1010000011000010000000010111");
    }

    #[test]
    fn test_expand_hex_keeps_leading_zeros() {
        let bits = expand_hex("0001").unwrap();
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.count_ones(), 1);
        assert!(bits[15]);
    }

    #[test]
    fn test_expand_hex_uppercase() {
        assert_eq!(expand_hex("F").unwrap(), expand_hex("f").unwrap());
    }

    #[test]
    fn test_expand_hex_rejects_non_hex() {
        assert_eq!(
            expand_hex("12g4"),
            Err(InvariantViolation::InvalidHexDigit {
                digit: 'g',
                position: 2
            })
        );
    }

    #[test]
    fn test_first_rows_of_example() {
        let assembled = build_grid("flqrgnkx", 8);
        let picture = assembled.grid.crop(8, 8).to_string();
        assert_eq!(
            picture,
            "##.#.#..\n\
             .#.#.#.#\n\
             ....#.#.\n\
             #.#.##.#\n\
             .##.#...\n\
             ##..#..#\n\
             .#...#..\n\
             ##.#.##."
        );
        assert_eq!(assembled.used, 534);
        assert_eq!(assembled.used, assembled.grid.count_ones());
    }

    #[test]
    fn test_uniform_row_width() {
        let assembled = build_grid("abc", 16);
        assert_eq!(assembled.grid.rows(), 16);
        assert_eq!(assembled.grid.width(), ROW_BITS);
        for row in 0..16 {
            assert_eq!(assembled.grid.row(row).len(), ROW_BITS);
        }
    }

    #[test]
    fn test_zero_rows() {
        let assembled = build_grid("abc", 0);
        assert_eq!(assembled.grid.rows(), 0);
        assert_eq!(assembled.used, 0);
    }

    #[test]
    fn test_latin1_key() {
        let assembled = build_grid("café", 2);
        assert_eq!(assembled.grid.rows(), 2);
        assert_eq!(assembled.grid.width(), ROW_BITS);
    }

    #[test]
    #[should_panic(expected = "build_grid: count 8364 exceeds list length 256")]
    fn test_key_beyond_latin1_panics() {
        build_grid("€", 1);
    }

    #[test]
    fn test_hasher_rounds_flow_through() {
        let mut hasher = KnotHasher::with_rounds(1);
        let one_round = build_grid_with(&mut hasher, "flqrgnkx", 2);
        assert_ne!(one_round, build_grid("flqrgnkx", 2));
    }
}
