//! A two-variant value holder for pipeline-style code.
//!
//! `Either<L, R>` carries exactly one of two payloads at a time. No meaning
//! is attached to the sides beyond convention: callers typically route an
//! alternative (often an error) on the left and a success on the right,
//! then transform whichever side they care about through a projection
//! instead of branching by hand.

use crate::{
    error::Side,
    projection::{LeftProjection, RightProjection},
};

/// A type that can hold one of two possible values.
///
/// The discriminant and the payload are one and the same, so an instance
/// can never disagree with itself about which side it holds. Values are
/// immutable once constructed; every combinator consumes the value and
/// returns a new one.
///
/// # Examples
/// ```
/// use twofold_core::Either;
///
/// let ok: Either<&str, i32> = Either::Right(2);
/// let doubled = ok.right().map(|n| n * 2);
/// assert_eq!(doubled, Either::Right(4));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// Left variant
    Left(L),
    /// Right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps a present value on the left, or the supplied default on the right.
    pub fn from_left(opt: Option<L>, right_default: R) -> Self {
        match opt {
            Some(value) => Either::Left(value),
            None => Either::Right(right_default),
        }
    }

    /// Wraps a present value on the right, or the supplied default on the left.
    pub fn from_right(opt: Option<R>, left_default: L) -> Self {
        match opt {
            Some(value) => Either::Right(value),
            None => Either::Left(left_default),
        }
    }

    /// Returns true if this value holds a left payload.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns true if this value holds a right payload.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns which side is populated.
    pub fn side(&self) -> Side {
        match self {
            Either::Left(_) => Side::Left,
            Either::Right(_) => Side::Right,
        }
    }

    /// Applies exactly one of the two functions, chosen by the populated side.
    pub fn fold<T, Fl, Fr>(self, on_left: Fl, on_right: Fr) -> T
    where
        Fl: FnOnce(L) -> T,
        Fr: FnOnce(R) -> T,
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Flips the sides, preserving the payload value.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    /// Takes the payload by reference, leaving the value in place.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Selects the left side, exposing its combinator surface.
    pub fn left(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// Selects the right side, exposing its combinator surface.
    pub fn right(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }
}
