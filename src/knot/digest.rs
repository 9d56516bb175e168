// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot hash digests.
//!
//! A key is hashed in four steps:
//!
//! 1. Its character codes, followed by [`LENGTH_SUFFIX`], form the length
//!    sequence.
//! 2. The marks `0..=255` are knotted with those lengths for [`ROUNDS`] rounds.
//! 3. The resulting sparse hash is folded into 16 bytes, each the XOR of one
//!    block of 16 consecutive marks.
//! 4. The 16 bytes are rendered as 32 lowercase hex digits.
//!
//! # Examples
//!
//! ```
//! use knot_grid::knot::{knot_hash, knot_hash_hex};
//!
//! assert_eq!(knot_hash_hex(""), "a2582a3a0e66e6e86e3812dcb672a272");
//! assert_eq!(knot_hash("AoC 2017").to_string(), "33efeb34ea91902bb2f59c9920caa6cd");
//! ```

use crate::errors::InvariantViolation;
use crate::knot::constants::{
    BLOCK_LEN, DIGEST_HEX_LEN, DIGEST_LEN, LENGTH_SUFFIX, LIST_LEN, ROUNDS,
};
use crate::knot::solver::KnotSolver;
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

/// The lengths that drive one knot hash: key character codes plus the fixed
/// suffix.
///
/// Each character contributes one length, its Unicode scalar value, so codes
/// up to [`LIST_LEN`] (all of Latin-1, plus U+0100) are usable. Anything
/// higher cannot be a reversal length over the 256 marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthSequence(Vec<usize>);

impl LengthSequence {
    /// Build the sequence for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` holds a character whose code exceeds [`LIST_LEN`].
    pub fn from_key(key: &str) -> Self {
        match Self::try_from_key(key) {
            Ok(lengths) => lengths,
            Err(violation) => panic!("LengthSequence::from_key: {}", violation),
        }
    }

    /// Checked form of [`LengthSequence::from_key`].
    pub fn try_from_key(key: &str) -> Result<Self, InvariantViolation> {
        let mut lengths = Vec::with_capacity(key.len() + LENGTH_SUFFIX.len());
        for c in key.chars() {
            let code = c as usize;
            if code > LIST_LEN {
                return Err(InvariantViolation::CountTooLarge {
                    count: code,
                    len: LIST_LEN,
                });
            }
            lengths.push(code);
        }
        lengths.extend_from_slice(&LENGTH_SUFFIX);
        Ok(Self(lengths))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the suffix is present even for an empty key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// XOR-fold consecutive blocks of `block` elements.
///
/// A trailing partial block is ignored.
///
/// # Panics
///
/// Panics if `block` is zero.
pub fn dense_hash(sparse: &[u8], block: usize) -> Vec<u8> {
    sparse
        .chunks_exact(block)
        .map(|chunk| chunk.iter().fold(0, |acc, &mark| acc ^ mark))
        .collect()
}

/// A 16-byte knot hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Fold a fully knotted list of marks into a digest.
    pub fn from_sparse(sparse: &[u8; LIST_LEN]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, folded) in bytes.iter_mut().zip(dense_hash(sparse, BLOCK_LEN)) {
            *byte = folded;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render as 32 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Number of set bits across all 128.
    pub fn count_ones(&self) -> usize {
        self.0.view_bits::<Msb0>().count_ones()
    }

    /// Bits of the digest, most significant bit of the first byte first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.view_bits::<Msb0>().iter().by_vals()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = InvariantViolation;

    /// Parse 32 hex digits (either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != DIGEST_HEX_LEN {
            return Err(InvariantViolation::DigestLength {
                len,
                expected: DIGEST_HEX_LEN,
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (position, digit) in s.chars().enumerate() {
            let nibble = hex_digit_value(digit, position)?;
            let shift = if position % 2 == 0 { 4 } else { 0 };
            bytes[position / 2] |= nibble << shift;
        }
        Ok(Self(bytes))
    }
}

/// Value of one hex digit, or the error naming where it was found.
pub(crate) fn hex_digit_value(digit: char, position: usize) -> Result<u8, InvariantViolation> {
    digit
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or(InvariantViolation::InvalidHexDigit { digit, position })
}

/// Reusable knot hasher.
///
/// Owns one working list, reset to `0..=255` before every hash, so hashing many
/// keys does not allocate a fresh list per key.
#[derive(Debug, Clone)]
pub struct KnotHasher {
    marks: [u8; LIST_LEN],
    solver: KnotSolver,
    rounds: usize,
}

impl KnotHasher {
    /// A hasher running the standard 64 rounds.
    pub fn new() -> Self {
        Self::with_rounds(ROUNDS)
    }

    pub fn with_rounds(rounds: usize) -> Self {
        Self {
            marks: [0; LIST_LEN],
            solver: KnotSolver::new(),
            rounds,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// # Panics
    ///
    /// Panics if `key` holds a character whose code exceeds [`LIST_LEN`].
    pub fn hash(&mut self, key: &str) -> Digest {
        self.hash_lengths(&LengthSequence::from_key(key))
    }

    /// Checked form of [`KnotHasher::hash`].
    pub fn try_hash(&mut self, key: &str) -> Result<Digest, InvariantViolation> {
        Ok(self.hash_lengths(&LengthSequence::try_from_key(key)?))
    }

    pub fn hash_lengths(&mut self, lengths: &LengthSequence) -> Digest {
        for (value, mark) in self.marks.iter_mut().enumerate() {
            *mark = value as u8;
        }
        // A LengthSequence never holds a length above LIST_LEN.
        self.solver.run(&mut self.marks, lengths.as_slice(), self.rounds);
        Digest::from_sparse(&self.marks)
    }
}

impl Default for KnotHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Knot hash of `key` with the standard parameters.
///
/// # Panics
///
/// Panics if `key` holds a character whose code exceeds [`LIST_LEN`]; see
/// [`try_knot_hash`].
pub fn knot_hash(key: &str) -> Digest {
    KnotHasher::new().hash(key)
}

/// Knot hash of `key` rendered as lowercase hex.
pub fn knot_hash_hex(key: &str) -> String {
    knot_hash(key).to_hex()
}

/// Checked form of [`knot_hash`], for keys that may hold characters above
/// [`LIST_LEN`].
pub fn try_knot_hash(key: &str) -> Result<Digest, InvariantViolation> {
    KnotHasher::new().try_hash(key)
}
