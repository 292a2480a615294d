use thiserror::Error;

/// A fold that stopped early: the error its step function reported, plus
/// the accumulator as of the failing step.
///
/// Both [`crate::maps::try_fold`] and [`crate::slices::try_fold`] thread an
/// accumulator through their input and stop at the first step that returns
/// `Err`. The step builds the `Halted` itself, so it decides what the
/// accumulator looks like at the point of failure; the fold hands it back
/// unchanged, with no wrapping or translation of the error type.
///
/// # Use
///
/// ```rust
/// use onepass::{slices, Halted};
///
/// let counts = ["three", "oversized!", "four"];
/// let halted = slices::try_fold(&counts, 0, |total, word: &&str| {
///     if word.len() > 8 {
///         Err(Halted::new(total, format!("word too long: {word}")))
///     } else {
///         Ok(total + word.len())
///     }
/// })
/// .unwrap_err();
///
/// assert_eq!(halted.acc, 5); // "three" was counted before the failure
/// assert_eq!(halted.error, "word too long: oversized!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fold halted early: {error}")]
pub struct Halted<R, E> {
    /// accumulator as of the failing step
    pub acc: R,
    /// error reported by the failing step
    pub error: E,
}

impl<R, E> Halted<R, E> {
    pub fn new(acc: R, error: E) -> Self {
        Self { acc, error }
    }
}
