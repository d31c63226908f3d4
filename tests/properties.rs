//! Property-based tests using proptest.
//!
//! These check the filter's invariants over arbitrary items and parameters.

use bloomset::hash::{self, DoubleHash};
use bloomset::params::optimal_params;
use bloomset::BloomFilter;
use proptest::prelude::*;

/// Arbitrary item bytes, including the empty string.
fn arb_item() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Valid false positive rates.
fn arb_fp_rate() -> impl Strategy<Value = f64> {
    1e-9f64..1.
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every inserted item is reported as present.
    #[test]
    fn prop_no_false_negatives(
        items in prop::collection::vec(arb_item(), 1..64),
        fp_rate in 0.0001f64..0.5,
    ) {
        let mut bf = BloomFilter::with_rate(items.len(), fp_rate).unwrap();

        for item in &items {
            bf.insert(item);
        }
        for item in &items {
            prop_assert!(bf.contains(item));
        }
    }

    /// Every derived index falls inside the bit vector.
    #[test]
    fn prop_index_in_range(
        item in arb_item(),
        m in 1usize..1_000_000,
        i in any::<u64>(),
    ) {
        prop_assert!(hash::index(&item, i, m) < m);
    }

    /// Indices depend on nothing but the item bytes, `i` and `m`.
    #[test]
    fn prop_deterministic(item in arb_item(), m in 1usize..100_000, k in 1usize..32) {
        let first: Vec<_> = DoubleHash::new(&item).indices(k, m).collect();
        let second: Vec<_> = DoubleHash::new(&item.clone()).indices(k, m).collect();

        prop_assert_eq!(first, second);
    }

    /// Inserting never clears a bit.
    #[test]
    fn prop_monotonic(items in prop::collection::vec(arb_item(), 1..32)) {
        let mut bf = BloomFilter::new(16).unwrap();
        let mut previous = bf.as_bytes().to_vec();

        for item in &items {
            bf.insert(item);

            for (old, new) in previous.iter().zip(bf.as_bytes()) {
                prop_assert_eq!(old & new, *old);
            }
            previous = bf.as_bytes().to_vec();
        }
    }

    /// Valid parameters always yield a usable filter shape.
    #[test]
    fn prop_capacity_bound(capacity in 1usize..100_000, fp_rate in arb_fp_rate()) {
        let (bits, hashes) = optimal_params(capacity, fp_rate).unwrap();

        prop_assert!(bits >= 1);
        prop_assert!(hashes >= 1);

        let bf = BloomFilter::with_rate(capacity, fp_rate).unwrap();
        prop_assert_eq!(bf.bits(), bits);
        prop_assert_eq!(bf.hashes(), hashes);
    }
}
