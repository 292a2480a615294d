//! Single-pass functional helpers for maps and slices.
//!
//! Two independent modules, one per container shape:
//!
//! - [`maps`]: filter, map, fold, keys/values extraction, union and
//!   intersection over [`std::collections::HashMap`]
//! - [`slices`]: filter, map, fold and map-building over slices
//!
//! Every operation is a single pass over its input. Nothing here fails on
//! its own behalf; the one place an error can appear is a fold whose
//! caller-supplied step reports one, in which case iteration stops at that
//! step and the error comes back as a [`Halted`] carrying the accumulator
//! as of the failing step.

mod fold;
pub mod maps;
pub mod slices;

pub use fold::Halted;
