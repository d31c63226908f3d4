// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types.
use thiserror::Error;

/// Errors returned by filter construction and bit vector access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The expected item count or the false positive rate is unusable.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A bit index fell outside the vector.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the vector, in bits.
        len: usize,
    },

    /// Two filters with different sizes or hash counts were combined.
    #[error("unable to combine filters with different configurations")]
    Incompatible,
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
