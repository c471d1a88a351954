//! Criterion-based benchmark harnesses, generic over any backend.
//!
//! Backend crates call these functions to measure the cost of the builder
//! protocol against a few representative parameter sets.

pub mod builder;
