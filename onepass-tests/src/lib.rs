//! Property tests for the onepass library.
//!
//! The interesting contracts live here: everything the library promises
//! about filter counts, projection images, fold short-circuiting and the
//! union/intersect laws is checked against arbitrary inputs. Concrete
//! edge-case tests sit next to the implementation in the library crate.

pub mod fixtures;

#[cfg(test)]
mod maps_props;
