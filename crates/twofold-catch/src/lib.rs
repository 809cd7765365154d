#![warn(missing_docs)]

//! twofold-catch: bridges panicking computations into the value model.
//!
//! Imperative code signals failure by panicking; pipeline code wants a
//! value it can route. [`PanicCatcher`] runs a computation and converts a
//! panic whose payload type is exactly the guarded type into an
//! [`Either::Left`](twofold_core::Either) (or an absent `Option`), while
//! letting every other panic continue unwinding untouched.

/// Panic interception with exact payload-type matching.
pub mod catcher;

pub use catcher::{catching, PanicCatcher};
