//! Shared proptest strategies.

use std::collections::HashMap;

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;

/// Values stay small enough that summing a whole container never
/// overflows an i64.
pub fn arb_map() -> impl Strategy<Value = HashMap<String, i64>> {
    hash_map("[a-z]{1,8}", -1000i64..1000, 0..32)
}

/// A nonempty map paired with a 1-based step index to fail a fold on.
pub fn arb_map_with_fail_point() -> impl Strategy<Value = (HashMap<String, i64>, usize)> {
    hash_map("[a-z]{1,8}", -1000i64..1000, 1..32).prop_flat_map(|m| {
        let len = m.len();
        (Just(m), 1..=len)
    })
}

pub fn arb_ints() -> impl Strategy<Value = Vec<i64>> {
    vec(-1000i64..1000, 0..64)
}

/// A nonempty vector paired with a 1-based step index to fail a fold on.
pub fn arb_ints_with_fail_point() -> impl Strategy<Value = (Vec<i64>, usize)> {
    vec(-1000i64..1000, 1..64).prop_flat_map(|sl| {
        let len = sl.len();
        (Just(sl), 1..=len)
    })
}

/// Keys drawn from a domain of four, so collisions are common.
pub fn arb_keyed_pairs() -> impl Strategy<Value = Vec<(u8, i64)>> {
    vec((0u8..4, -1000i64..1000), 0..32)
}
