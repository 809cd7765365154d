//! One-sided combinator views over an [`Either`] value.
//!
//! A projection binds an `Either` to one of its sides and exposes that
//! side's transformation surface. Only the bound side is "active": when the
//! value holds the other side, every combinator passes it through untouched
//! and the supplied function is never invoked.
//!
//! Projections are transient by design. They take the `Either` by value,
//! apply one operation, and give the (possibly transformed) value back, so
//! a chain reads left to right without ever dereferencing the wrong side:
//!
//! ```
//! use twofold_core::Either;
//!
//! let input: Either<String, i32> = Either::Right(41);
//! let result = input
//!     .right()
//!     .map(|n| n + 1)
//!     .left()
//!     .map(|msg: String| format!("failed: {}", msg));
//! assert_eq!(result, Either::Right(42));
//! ```

use crate::{
    either::Either,
    error::{ErrorKind, Result, Side},
};

/// Combinator surface bound to the left side of an [`Either`].
///
/// Created by [`Either::left`].
#[derive(Copy, Clone, Debug)]
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    pub(crate) fn new(either: Either<L, R>) -> Self {
        LeftProjection { either }
    }

    /// Returns the left payload.
    ///
    /// # Panics
    /// Panics with a wrong-variant message when the value holds a right
    /// payload. Callers that cannot guarantee the side should use
    /// [`try_get`](Self::try_get), [`get_or`](Self::get_or), or
    /// [`Either::fold`] instead.
    pub fn get(self) -> L {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => panic!(
                "{}",
                ErrorKind::WrongVariant { expected: Side::Left, actual: Side::Right }
            ),
        }
    }

    /// Returns the left payload, or a wrong-variant error.
    pub fn try_get(self) -> Result<L> {
        match self.either {
            Either::Left(value) => Ok(value),
            Either::Right(_) => {
                Err(ErrorKind::WrongVariant { expected: Side::Left, actual: Side::Right })
            }
        }
    }

    /// Returns the left payload, or the supplied default. Total.
    pub fn get_or(self, default: L) -> L {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => default,
        }
    }

    /// Transforms the left payload, passing a right payload through unchanged.
    ///
    /// On the inactive side only the static left type changes; the right
    /// payload itself is never touched and `f` is never called.
    pub fn map<T, F: FnOnce(L) -> T>(self, f: F) -> Either<T, R> {
        match self.either {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Replaces the value with `f(payload)` when left-holding, passing a
    /// right payload through unchanged.
    pub fn flat_map<T, F: FnOnce(L) -> Either<T, R>>(self, f: F) -> Either<T, R> {
        match self.either {
            Either::Left(value) => f(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Invokes the consumer with the left payload, if present, and returns
    /// the original value for further chaining.
    pub fn peek<F: FnOnce(&L)>(self, consumer: F) -> Either<L, R> {
        if let Either::Left(value) = &self.either {
            consumer(value);
        }
        self.either
    }

    /// Consumes the left payload, if present. Terminal form of [`peek`](Self::peek).
    pub fn for_each<F: FnOnce(L)>(self, consumer: F) {
        if let Either::Left(value) = self.either {
            consumer(value);
        }
    }

    /// Returns true iff the value is left-holding and the predicate holds.
    pub fn exists<P: FnOnce(&L) -> bool>(self, predicate: P) -> bool {
        match &self.either {
            Either::Left(value) => predicate(value),
            Either::Right(_) => false,
        }
    }

    /// Converts to an `Option`, present iff the value is left-holding.
    pub fn to_option(self) -> Option<L> {
        match self.either {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Keeps the original value iff it is left-holding and the predicate
    /// holds; otherwise yields `None` (including for every right-holding
    /// value, whose payload is never tested).
    pub fn filter<P: FnOnce(&L) -> bool>(self, predicate: P) -> Option<Either<L, R>> {
        let keep = match &self.either {
            Either::Left(value) => predicate(value),
            Either::Right(_) => false,
        };
        if keep {
            Some(self.either)
        } else {
            None
        }
    }
}

/// Combinator surface bound to the right side of an [`Either`].
///
/// Created by [`Either::right`]. Exact mirror of [`LeftProjection`].
#[derive(Copy, Clone, Debug)]
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    pub(crate) fn new(either: Either<L, R>) -> Self {
        RightProjection { either }
    }

    /// Returns the right payload.
    ///
    /// # Panics
    /// Panics with a wrong-variant message when the value holds a left
    /// payload. Callers that cannot guarantee the side should use
    /// [`try_get`](Self::try_get), [`get_or`](Self::get_or), or
    /// [`Either::fold`] instead.
    pub fn get(self) -> R {
        match self.either {
            Either::Right(value) => value,
            Either::Left(_) => panic!(
                "{}",
                ErrorKind::WrongVariant { expected: Side::Right, actual: Side::Left }
            ),
        }
    }

    /// Returns the right payload, or a wrong-variant error.
    pub fn try_get(self) -> Result<R> {
        match self.either {
            Either::Right(value) => Ok(value),
            Either::Left(_) => {
                Err(ErrorKind::WrongVariant { expected: Side::Right, actual: Side::Left })
            }
        }
    }

    /// Returns the right payload, or the supplied default. Total.
    pub fn get_or(self, default: R) -> R {
        match self.either {
            Either::Right(value) => value,
            Either::Left(_) => default,
        }
    }

    /// Transforms the right payload, passing a left payload through unchanged.
    pub fn map<T, F: FnOnce(R) -> T>(self, f: F) -> Either<L, T> {
        match self.either {
            Either::Right(value) => Either::Right(f(value)),
            Either::Left(value) => Either::Left(value),
        }
    }

    /// Replaces the value with `f(payload)` when right-holding, passing a
    /// left payload through unchanged.
    pub fn flat_map<T, F: FnOnce(R) -> Either<L, T>>(self, f: F) -> Either<L, T> {
        match self.either {
            Either::Right(value) => f(value),
            Either::Left(value) => Either::Left(value),
        }
    }

    /// Invokes the consumer with the right payload, if present, and returns
    /// the original value for further chaining.
    pub fn peek<F: FnOnce(&R)>(self, consumer: F) -> Either<L, R> {
        if let Either::Right(value) = &self.either {
            consumer(value);
        }
        self.either
    }

    /// Consumes the right payload, if present. Terminal form of [`peek`](Self::peek).
    pub fn for_each<F: FnOnce(R)>(self, consumer: F) {
        if let Either::Right(value) = self.either {
            consumer(value);
        }
    }

    /// Returns true iff the value is right-holding and the predicate holds.
    pub fn exists<P: FnOnce(&R) -> bool>(self, predicate: P) -> bool {
        match &self.either {
            Either::Right(value) => predicate(value),
            Either::Left(_) => false,
        }
    }

    /// Converts to an `Option`, present iff the value is right-holding.
    pub fn to_option(self) -> Option<R> {
        match self.either {
            Either::Right(value) => Some(value),
            Either::Left(_) => None,
        }
    }

    /// Keeps the original value iff it is right-holding and the predicate
    /// holds; otherwise yields `None` (including for every left-holding
    /// value, whose payload is never tested).
    pub fn filter<P: FnOnce(&R) -> bool>(self, predicate: P) -> Option<Either<L, R>> {
        let keep = match &self.either {
            Either::Right(value) => predicate(value),
            Either::Left(_) => false,
        };
        if keep {
            Some(self.either)
        } else {
            None
        }
    }
}
