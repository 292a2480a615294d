use std::collections::{HashMap, HashSet};

use onepass::{maps, Halted};
use proptest::prelude::*;

use crate::fixtures::{arb_map, arb_map_with_fail_point};

proptest! {
    #[test]
    fn filter_keeps_exactly_the_matching_pairs(m in arb_map()) {
        let kept = maps::filter(&m, |_, v| v % 2 == 0);

        let matching = m.values().filter(|v| *v % 2 == 0).count();
        prop_assert_eq!(kept.len(), matching);
        for (k, v) in &kept {
            prop_assert!(v % 2 == 0);
            prop_assert_eq!(m.get(k), Some(v));
        }
    }

    #[test]
    fn injective_projection_maps_the_key_set(m in arb_map()) {
        // suffixing is injective on an already-unique key set
        let projected = maps::map(&m, |k, v| (format!("{k}#"), *v));

        prop_assert_eq!(projected.len(), m.len());
        let image: HashSet<String> = m.keys().map(|k| format!("{k}#")).collect();
        let got: HashSet<String> = projected.into_keys().collect();
        prop_assert_eq!(got, image);
    }

    #[test]
    fn fold_sums_like_the_iterator(m in arb_map()) {
        let sum = maps::try_fold(&m, 0i64, |acc, _, v| {
            Ok::<_, Halted<i64, String>>(acc + v)
        });
        prop_assert_eq!(sum.unwrap(), m.values().sum::<i64>());
    }

    #[test]
    fn fold_counts_exactly_the_steps_before_the_failure((m, fail_on) in arb_map_with_fail_point()) {
        let mut calls = 0usize;
        let halted = maps::try_fold(&m, 0usize, |acc, _, _| {
            calls += 1;
            if calls == fail_on {
                Err(Halted::new(acc + 1, "boom"))
            } else {
                Ok(acc + 1)
            }
        })
        .unwrap_err();

        prop_assert_eq!(calls, fail_on);
        prop_assert_eq!(halted.acc, fail_on);
        prop_assert_eq!(halted.error, "boom");
    }

    #[test]
    fn union_into_is_a_right_biased_merge(m1 in arb_map(), m2 in arb_map()) {
        let mut merged = m1.clone();
        maps::union_into(&mut merged, &m2);

        let expected_keys: HashSet<&String> = m1.keys().chain(m2.keys()).collect();
        prop_assert_eq!(merged.len(), expected_keys.len());
        for (k, v) in &merged {
            match m2.get(k) {
                Some(from_m2) => prop_assert_eq!(v, from_m2),
                None => prop_assert_eq!(Some(v), m1.get(k)),
            }
        }
    }

    #[test]
    fn intersect_keeps_shared_keys_with_right_values(m1 in arb_map(), m2 in arb_map()) {
        let both = maps::intersect(&m1, &m2);

        for (k, v) in &both {
            prop_assert!(m1.contains_key(k));
            prop_assert_eq!(m2.get(k), Some(v));
        }
        let shared = m2.keys().filter(|k| m1.contains_key(*k)).count();
        prop_assert_eq!(both.len(), shared);
    }

    #[test]
    fn values_and_keys_have_the_size_of_the_map(m in arb_map()) {
        prop_assert_eq!(maps::to_vec(&m).len(), m.len());
        prop_assert_eq!(maps::values(&m).len(), m.len());

        let ks: HashSet<String> = maps::keys(&m).into_iter().collect();
        let expected: HashSet<String> = m.keys().cloned().collect();
        prop_assert_eq!(ks, expected);
    }

    #[test]
    fn to_singleton_picks_a_pair_of_the_map(m in arb_map()) {
        let (k, v) = maps::to_singleton(&m);
        if m.is_empty() {
            prop_assert_eq!(k, String::new());
            prop_assert_eq!(v, 0);
        } else {
            prop_assert_eq!(m.get(&k), Some(&v));
        }
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn union_lands_in_the_first_maps_storage() {
        let mut m1: HashMap<String, i64> = [("a".to_string(), 1)].into();
        let before = m1.capacity();
        let m2 = HashMap::new();
        maps::union_into(&mut m1, &m2);
        // no rehash for an empty right-hand side
        assert_eq!(m1.capacity(), before);
        assert_eq!(m1.len(), 1);
    }
}
