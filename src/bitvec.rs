// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

use crate::error::{Error, Result};

/// A packed, fixed-size bit vector. Bits can be set but never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given capacity, in bits. All bits start at zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            nbits: capacity,
            bytes: vec![0; capacity.div_ceil(8)],
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`. Setting an already set bit has no effect.
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check_bounds(index)?;
        let (byte_index, mask) = Self::locate(index);

        self.bytes[byte_index] |= mask;

        Ok(())
    }

    /// Check whether a bit is set.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_bounds(index)?;

        Ok(self.bit(index))
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the union of two bit vectors.
    /// This is a bitwise `OR` of two vectors.
    pub fn union(&self, other: &Self) -> Self {
        if self.nbits != other.nbits {
            panic!(
                "unable to union bitvecs with different lengths: {} and {}",
                self.nbits, other.nbits
            );
        }
        Self {
            bytes: self
                .bytes
                .iter()
                .zip(other.bytes.iter())
                .map(|(a, b)| a | b)
                .collect(),
            nbits: self.nbits,
        }
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.nbits {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.nbits,
            });
        }
        Ok(())
    }

    fn locate(index: usize) -> (usize, u8) {
        (index / 8, 0x01 << (index % 8))
    }

    /// Caller guarantees `index < self.nbits`.
    fn bit(&self, index: usize) -> bool {
        let (byte_index, mask) = Self::locate(index);

        self.bytes[byte_index] & mask == mask
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}
