// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter over byte strings using double hashing.

use std::fmt;

use tracing::{debug, error};

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::hash::DoubleHash;
use crate::params;

/// The default false positive probability value, 1%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// A Bloom filter over byte strings.
///
/// The size and hash count are derived once, at construction, and never change.
/// Only insertion is supported: no operation ever clears a bit.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    bits: BitVec,
    nhashes: usize,
    expected_items: usize,
    fp_rate: f64,
}

/// Snapshot of a filter's configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Details {
    /// Expected number of items (`n`).
    pub expected_items: usize,
    /// Size of the bit vector (`m`).
    pub bits: usize,
    /// Number of hashes per item (`k`).
    pub hashes: usize,
    /// Target false positive probability (`p`).
    pub fp_rate: f64,
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} m={} k={} p={}",
            self.expected_items, self.bits, self.hashes, self.fp_rate
        )
    }
}

impl BloomFilter {
    /// Return a new Bloom filter with a given approximate item capacity.
    /// The false positive probability is [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_rate(capacity, DEFAULT_FALSE_POSITIVE_RATE)
    }

    /// Return a new Bloom filter with a given approximate item capacity
    /// and a desired false positive rate.
    ///
    /// Fails with [`Error::InvalidParameter`] if `capacity` is zero or
    /// `fp_rate` is not strictly between `0` and `1`.
    pub fn with_rate(capacity: usize, fp_rate: f64) -> Result<Self> {
        let (nbits, nhashes) = params::optimal_params(capacity, fp_rate)?;

        debug!(
            expected_items = capacity,
            fp_rate,
            bits = nbits,
            hashes = nhashes,
            "Bloom filter constructed"
        );

        Ok(Self {
            bits: BitVec::new(nbits),
            nhashes,
            expected_items: capacity,
            fp_rate,
        })
    }

    /// Add an item to the filter. This operation is idempotent with regards
    /// to each unique item.
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        let hash = DoubleHash::new(item.as_ref());

        for index in hash.indices(self.nhashes, self.bits.len()) {
            if let Err(e) = self.bits.set(index) {
                self.index_fault(e);
            }
        }
    }

    /// Return whether or not a given item is likely in the filter. There is a
    /// possibility for a false positive with the probability being around the
    /// filter's `p` value, but a false negative will never occur.
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        let hash = DoubleHash::new(item.as_ref());

        for index in hash.indices(self.nhashes, self.bits.len()) {
            match self.bits.get(index) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(e) => self.index_fault(e),
            }
        }
        true
    }

    /// Return the filter's configuration.
    pub fn details(&self) -> Details {
        Details {
            expected_items: self.expected_items,
            bits: self.bits.len(),
            hashes: self.nhashes,
            fp_rate: self.fp_rate,
        }
    }

    /// Return the number of bits in this filter (`m` parameter).
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Expected number of items the filter was sized for (`n` parameter).
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Target false positive rate the filter was sized for (`p` parameter).
    pub fn fp_rate(&self) -> f64 {
        self.fp_rate
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Count the approximate number of distinct items in the filter.
    ///
    /// Once every bit is set the estimate is unbounded and `usize::MAX` is returned.
    pub fn count(&self) -> usize {
        let ones = self.bits.count_ones();
        if ones == self.bits.len() {
            return usize::MAX;
        }
        let nbits = self.bits.len() as f64;
        let nbits_set = ones as f64;
        let nhashes = self.nhashes as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        count.round() as usize
    }

    /// Estimate the current false positive probability from the fraction of
    /// bits set, ie. `(ones / m)^k`.
    pub fn estimated_fp_rate(&self) -> f64 {
        let load = self.bits.count_ones() as f64 / self.bits.len() as f64;

        load.powf(self.nhashes as f64)
    }

    /// Compute the union of two Bloom filters.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if !self.is_comparable(other) {
            return Err(Error::Incompatible);
        }
        let bits = self.bits.union(&other.bits);

        debug!(
            bits = bits.len(),
            bits_set = bits.count_ones(),
            "Bloom filters merged"
        );

        Ok(Self {
            bits,
            nhashes: self.nhashes,
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
        })
    }

    /// Check whether two filters can be unioned.
    pub fn is_comparable(&self, other: &Self) -> bool {
        self.nhashes == other.nhashes && self.bits.len() == other.bits.len()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// Indices are reduced modulo `m`, so reaching this is a bug.
    #[cold]
    fn index_fault(&self, e: Error) -> ! {
        error!(
            bits = self.bits.len(),
            hashes = self.nhashes,
            "Bloom filter derived an invalid bit index: {}",
            e
        );
        panic!("bloom filter derived an invalid bit index: {}", e);
    }
}

impl AsRef<[u8]> for BloomFilter {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl PartialEq for BloomFilter {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.nhashes == other.nhashes
    }
}

impl Eq for BloomFilter {}
