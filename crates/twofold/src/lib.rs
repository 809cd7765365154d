#![warn(missing_docs)]

//! Twofold: a small public API facade for the workspace.
//!
//! This crate provides a clean, stable surface that re-exports the most
//! commonly used types for pipeline-style code:
//!
//! - The disjoint-union value and its projections (`Either`,
//!   `LeftProjection`, `RightProjection`)
//! - Panic interception (`PanicCatcher`, `catching`)
//! - Pair adapters for iterator pipelines (`pairs`)
//! - Function-shape helpers (`swap_args`, `curried`, `uncurried`)
//!
//! Example
//! ```
//! use twofold::prelude::*;
//!
//! let value: Either<&str, i32> = Either::Right(21);
//! let doubled = value.right().map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let recovered = doubled.left().map(|msg| format!("failed: {}", msg));
//! assert_eq!(recovered.right().get_or(0), 42);
//! ```

// Core value types
pub use twofold_core::{Either, ErrorKind, LeftProjection, RightProjection, Side};
// Panic interception
pub use twofold_catch::{catching, PanicCatcher};
// Pair adapters for iterator pipelines
pub use twofold_stream::pairs;
// Function-shape helpers
pub use twofold_utilities::{curried, swap_args, uncurried};

/// Convenience prelude with the most commonly used items.
pub mod prelude {
    pub use crate::{catching, Either, ErrorKind, PanicCatcher, Side};
}
