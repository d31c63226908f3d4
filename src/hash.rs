// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit index derivation using double hashing.
//!
//! Two independent 64-bit digests are taken of each item: SipHash-1-3 under a
//! fixed key, and XXH3. The `i`-th index is then
//!
//! g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x)) mod m
//!
//! Both hashes are unseeded or fixed-key, so indices are stable across
//! processes and builds.
use std::hash::Hasher;

use siphasher::sip::SipHasher13;
use xxhash_rust::xxh3::xxh3_64;

/// Key used for the SipHash digest.
const SIPHASH_KEY: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// The two base digests of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleHash {
    h1: u64,
    h2: u64,
}

impl DoubleHash {
    /// Hash an item's bytes.
    pub fn new(item: &[u8]) -> Self {
        let mut sip = SipHasher13::new_with_key(&SIPHASH_KEY);
        sip.write(item);

        Self {
            h1: sip.finish(),
            h2: xxh3_64(item),
        }
    }

    /// Build from raw digests.
    pub fn from_digests(h1: u64, h2: u64) -> Self {
        Self { h1, h2 }
    }

    /// The `i`-th bit index in `[0, m)`.
    ///
    /// The combination is evaluated in `u128`, where `h1 + i * h2` cannot
    /// overflow for any 64-bit operands.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero.
    pub fn index(&self, i: u64, m: usize) -> usize {
        assert!(m > 0, "cannot derive an index into an empty bit vector");

        let r = self.h1 as u128 + i as u128 * self.h2 as u128;
        // The remainder is below `m`, so it fits back into `usize`.
        (r % m as u128) as usize
    }

    /// The first `k` bit indices in `[0, m)`.
    pub fn indices(self, k: usize, m: usize) -> impl Iterator<Item = usize> {
        (0..k as u64).map(move |i| self.index(i, m))
    }
}

/// Map an item to its `i`-th bit index in `[0, m)`.
pub fn index(item: &[u8], i: u64, m: usize) -> usize {
    DoubleHash::new(item).index(i, m)
}
