//! Single-pass helpers over slices.
//!
//! Unlike their [`crate::maps`] siblings, everything here is
//! order-preserving: filtering keeps relative order, mapping and folding
//! run left to right, and map-building resolves key collisions by
//! sequence order. Inputs are borrowed as `&[T]`; outputs are freshly
//! built `Vec`s or `HashMap`s.

use std::collections::HashMap;
use std::hash::Hash;

use crate::fold::Halted;

/// Returns the first element of `sl`, or the default value of the element
/// type if `sl` is empty.
pub fn to_singleton<T>(sl: &[T]) -> T
where
    T: Clone + Default,
{
    sl.first().cloned().unwrap_or_default()
}

/// Alias for [`to_singleton`]: the first element of `sl`, defaulted when
/// empty.
pub fn first<T>(sl: &[T]) -> T
where
    T: Clone + Default,
{
    to_singleton(sl)
}

/// Builds a new vector of the elements of `sl` for which `predicate`
/// evaluates to true, in their original relative order.
pub fn filter<T, P>(sl: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sl.iter().filter(|&t| predicate(t)).cloned().collect()
}

/// Projects `sl` into a new vector, applying `f` to each element in
/// order. The output has the same length as the input.
pub fn map<T, U, F>(sl: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sl.iter().map(f).collect()
}

/// Threads an accumulator left to right through `sl`, starting from
/// `seed`.
///
/// Stops at the first step that returns `Err` and hands that [`Halted`]
/// back as-is: the error the step reported, plus the accumulator as of
/// the failing step. An empty slice returns `Ok(seed)`.
pub fn try_fold<T, R, E, F>(sl: &[T], seed: R, mut f: F) -> Result<R, Halted<R, E>>
where
    F: FnMut(R, &T) -> Result<R, Halted<R, E>>,
{
    let mut acc = seed;
    for elem in sl {
        acc = f(acc, elem)?;
    }
    Ok(acc)
}

/// Builds a map from `sl`, using `key_fn` to derive the key for every
/// element.
///
/// Elements are inserted in sequence order, so on key collision the later
/// element wins — deterministically, unlike the unspecified-order
/// overwrite in [`crate::maps::map`].
///
/// # Use
///
/// ```rust
/// use onepass::slices;
///
/// let readings = [("x", 1), ("y", 2), ("x", 3)];
/// let latest = slices::to_map(&readings, |(name, _)| *name);
///
/// assert_eq!(latest, [("x", ("x", 3)), ("y", ("y", 2))].into());
/// ```
pub fn to_map<K, T, F>(sl: &[T], mut key_fn: F) -> HashMap<K, T>
where
    K: Eq + Hash,
    T: Clone,
    F: FnMut(&T) -> K,
{
    let mut m = HashMap::with_capacity(sl.len());
    for elem in sl {
        m.insert(key_fn(elem), elem.clone());
    }
    m
}
