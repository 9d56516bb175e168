// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reversal of a sub-range of a circular list.
//!
//! The list is treated as a ring: a range that runs past the last element
//! continues at index 0. A non-wrapping range is reversed in place. A wrapping
//! range is handled by rotating the ring so that `start` becomes index 0,
//! reversing the prefix, and rotating back (the inverse rotation splits the
//! ring at `len - start`). All three steps work on the slice in place.
//!
//! # Examples
//!
//! ```
//! use knot_grid::knot::reverse_cyclic;
//!
//! // The range 3, 4, 0, 1 wraps past the end.
//! let mut ring = [0, 1, 2, 3, 4];
//! reverse_cyclic(&mut ring, 3, 4);
//! assert_eq!(ring, [4, 3, 2, 1, 0]);
//! ```

use crate::errors::InvariantViolation;

/// Reverse `count` elements of `list` starting at `start`, wrapping at the end.
///
/// # Panics
///
/// Panics if `start >= list.len()` or `count > list.len()`.
pub fn reverse_cyclic<T>(list: &mut [T], start: usize, count: usize) {
    if let Err(violation) = try_reverse_cyclic(list, start, count) {
        panic!("reverse_cyclic: {}", violation);
    }
}

/// Checked form of [`reverse_cyclic`].
pub fn try_reverse_cyclic<T>(
    list: &mut [T],
    start: usize,
    count: usize,
) -> Result<(), InvariantViolation> {
    let len = list.len();
    if start >= len {
        return Err(InvariantViolation::StartOutOfRange { start, len });
    }
    if count > len {
        return Err(InvariantViolation::CountTooLarge { count, len });
    }

    if start + count <= len {
        list[start..start + count].reverse();
    } else {
        list.rotate_left(start);
        list[..count].reverse();
        list.rotate_right(start);
    }
    Ok(())
}
