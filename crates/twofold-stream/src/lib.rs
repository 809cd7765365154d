#![warn(missing_docs)]

//! twofold-stream: key/value pair adapters for iterator pipelines.
//!
//! Iterating a map yields `(key, value)` tuples, but most transformations
//! only care about one side of the pair. The [`pairs`] module lifts
//! single-side functions, consumers, predicates, and comparators into
//! pair-shaped ones, so `map`/`filter`/`for_each`/`sort_by` chains stay
//! free of hand-written destructuring.

/// Adapters lifting single-side functions into pair-shaped ones.
pub mod pairs;
