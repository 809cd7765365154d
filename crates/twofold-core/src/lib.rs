#![warn(missing_docs)]

//! twofold-core: the disjoint-union value type and its side projections.
//!
//! This crate provides the minimal set of value types shared across all
//! layers:
//! - `Either`, a two-variant holder carrying exactly one of two payloads
//! - `LeftProjection`/`RightProjection`, one-sided combinator views
//! - Variant-access error types
//!
//! The crate is kept dependency-free so it can sit below every other layer.

/// Either/Or type for carrying one of two possible payloads.
pub mod either;
/// Variant-access error types.
pub mod error;
/// One-sided combinator views over an `Either` value.
pub mod projection;

pub use either::Either;
pub use error::{ErrorKind, Side};
pub use projection::{LeftProjection, RightProjection};
