//! Single-pass helpers over [`HashMap`]s.
//!
//! Iteration order over a `HashMap` is unspecified and, thanks to the
//! per-map random hash state, differs from run to run and map to map.
//! Callers must not depend on which pair [`to_singleton`] picks or on the
//! order in which [`try_fold`] or [`map`] visit pairs.
//!
//! Read-only operations borrow their input and clone the pairs they keep.
//! The one in-place operation is [`union_into`], which takes its target by
//! `&mut`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::fold::Halted;

/// Returns one arbitrary (key, value) pair of `m`, chosen by native
/// iteration order. If `m` is empty, returns the default values for the
/// key and value types.
pub fn to_singleton<K, V>(m: &HashMap<K, V>) -> (K, V)
where
    K: Clone + Default,
    V: Clone + Default,
{
    m.iter()
        .next()
        .map(|(k, v)| (k.clone(), v.clone()))
        .unwrap_or_default()
}

/// Builds a new map of exactly the pairs of `m` for which `predicate`
/// evaluates to true. The predicate runs once per pair; `m` is untouched.
pub fn filter<K, V, P>(m: &HashMap<K, V>, mut predicate: P) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    m.iter()
        .filter(|&(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Projects `m` into a new map, applying `f` to every pair.
///
/// If `f` maps two input pairs to the same output key, the pair visited
/// later wins — and since iteration order is unspecified, which one that
/// is is unspecified too. Callers that need a deterministic result must
/// keep `f` injective on keys.
pub fn map<K, V, K2, V2, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
    F: FnMut(&K, &V) -> (K2, V2),
{
    m.iter().map(|(k, v)| f(k, v)).collect()
}

/// Threads an accumulator through every pair of `m`, in unspecified order,
/// starting from `seed`.
///
/// Stops at the first step that returns `Err` and hands that [`Halted`]
/// back as-is: the error the step reported, plus the accumulator as of the
/// failing step. An empty map returns `Ok(seed)`.
///
/// # Use
///
/// ```rust
/// use std::collections::HashMap;
/// use onepass::maps;
///
/// let prices: HashMap<&str, u32> = [("apple", 3), ("pear", 4)].into();
/// let total = maps::try_fold(&prices, 0u32, |sum, _item, price| {
///     Ok::<_, onepass::Halted<u32, String>>(sum + price)
/// })
/// .unwrap();
///
/// assert_eq!(total, 7);
/// ```
pub fn try_fold<K, V, R, E, F>(m: &HashMap<K, V>, seed: R, mut f: F) -> Result<R, Halted<R, E>>
where
    F: FnMut(R, &K, &V) -> Result<R, Halted<R, E>>,
{
    let mut acc = seed;
    for (k, v) in m {
        acc = f(acc, k, v)?;
    }
    Ok(acc)
}

/// Returns all values of `m` in unspecified order.
pub fn to_vec<K, V: Clone>(m: &HashMap<K, V>) -> Vec<V> {
    m.values().cloned().collect()
}

/// Alias for [`to_vec`]: all values of `m` in unspecified order.
pub fn values<K, V: Clone>(m: &HashMap<K, V>) -> Vec<V> {
    to_vec(m)
}

/// Returns all keys of `m` in unspecified order.
pub fn keys<K: Clone, V>(m: &HashMap<K, V>) -> Vec<K> {
    m.keys().cloned().collect()
}

/// Inserts every pair of `m2` into `m1`, overwriting on key collision
/// (`m2` wins). `m2` is untouched.
///
/// This is the one operation here that mutates an input, which is why it
/// takes `m1` by `&mut` and carries an `_into` name: the union lands in
/// `m1`'s own storage rather than in a fresh map.
///
/// # Use
///
/// ```rust
/// use std::collections::HashMap;
/// use onepass::maps;
///
/// let mut base: HashMap<&str, u32> = [("a", 1), ("b", 2)].into();
/// let update: HashMap<&str, u32> = [("b", 99), ("c", 3)].into();
/// maps::union_into(&mut base, &update);
///
/// assert_eq!(base, [("a", 1), ("b", 99), ("c", 3)].into());
/// ```
pub fn union_into<K, V>(m1: &mut HashMap<K, V>, m2: &HashMap<K, V>)
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    for (k, v) in m2 {
        m1.insert(k.clone(), v.clone());
    }
}

/// Builds a new map of every pair of `m2` whose key also exists in `m1`.
///
/// Values come from `m2`, membership is tested against `m1` — the
/// operation is deliberately asymmetric in which map's values survive.
/// Neither input is mutated.
pub fn intersect<K, V>(m1: &HashMap<K, V>, m2: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    m2.iter()
        .filter(|&(k, _)| m1.contains_key(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
