use std::fmt::{self, Display, Formatter};

/// Identifies one side of an [`Either`](crate::either::Either) value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left side, conventionally the alternative.
    Left,
    /// The right side, conventionally the success.
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors raised by payload access on an `Either` value.
///
/// Expected alternatives are never reported through this type; they travel
/// as ordinary `Either::Left` values. `ErrorKind` only describes the
/// programmer-error channel: asking a value for the payload of the side it
/// does not hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A payload was requested from the side that is not populated.
    WrongVariant {
        /// The side the caller asked for.
        expected: Side,
        /// The side the value actually holds.
        actual: Side,
    },
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::WrongVariant { expected, actual } => write!(
                f,
                "wrong variant access: expected a {} payload but the value holds {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Convenience alias for results carrying a variant-access error.
pub type Result<T> = std::result::Result<T, ErrorKind>;
