// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bloom filter sizing.
use std::f64;

use crate::error::{Error, Result};

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Return the optimal bit vector size `m` and hash count `k` for a filter
/// expected to hold `capacity` items at a false positive rate of `fp_rate`.
///
/// Fails if `capacity` is zero or `fp_rate` is not strictly between `0` and `1`.
pub fn optimal_params(capacity: usize, fp_rate: f64) -> Result<(usize, usize)> {
    if capacity == 0 {
        return Err(Error::InvalidParameter(
            "expected item count must be at least 1".to_owned(),
        ));
    }
    // Written this way so that NaN is rejected too.
    if !(fp_rate > 0. && fp_rate < 1.) {
        return Err(Error::InvalidParameter(format!(
            "false positive rate must be between 0 and 1 (exclusive), got {}",
            fp_rate
        )));
    }
    let nbits = optimal_bits(capacity, fp_rate);
    let nhashes = optimal_hashes(nbits, capacity);

    Ok((nbits, nhashes))
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate. Inputs are validated by [`optimal_params`].
pub(crate) fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    let nbits = (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil() as usize;

    nbits.max(1)
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size.
///
/// Also called `k`. Inputs are validated by [`optimal_params`].
pub(crate) fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    let nhashes = ((nbits as f64 / capacity as f64) * f64::consts::LN_2).round() as usize;

    nhashes.max(1)
}
