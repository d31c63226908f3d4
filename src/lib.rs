//! A Bloom filter over byte strings, sized from an expected item count and a
//! target false positive rate.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! Given `n` expected items and a false positive rate `p`, the filter uses
//!
//! m = ⌈-n ln(p) / ln(2)<sup>2</sup>⌉ bits and k = round((m / n) ln 2) hashes.
//!
//! Both are fixed at construction; the filter never resizes.
//!
//! # Double Hashing
//!
//! Rather than running `k` independent hash functions, each item is hashed
//! twice and the `k` bit positions are derived as
//!
//! g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x)) mod m
//!
//! as shown by Adam Kirsch and Michael Mitzenmacher in *Less Hashing, Same
//! Performance: Building a Better Bloom Filter*. Here H<sub>1</sub> is
//! SipHash-1-3 and H<sub>2</sub> is XXH3, both 64 bits wide.
//!
//! # Concurrency
//!
//! The filter is not internally synchronized. [`BloomFilter::insert`] takes
//! `&mut self`; to share a filter between threads, put it behind a lock such as
//! [`std::sync::RwLock`].
//!
//! # Example
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::with_rate(200, 0.0001)?;
//!
//! filter.insert("http://fraud.com");
//! filter.insert(b"http://webhack.com");
//!
//! assert!(filter.contains("http://fraud.com"));
//! assert!(filter.contains("http://webhack.com"));
//! assert!(!filter.contains("http://example.com"));
//!
//! println!("{}", filter.details()); // n=200 m=3835 k=13 p=0.0001
//! # Ok::<(), bloomset::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod hash;
pub mod params;

pub use bloom::{BloomFilter, Details, DEFAULT_FALSE_POSITIVE_RATE};
pub use error::{Error, Result};
