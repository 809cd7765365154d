//! Panic interception with exact payload-type matching.
//!
//! The matching rule is deliberately exact: a catcher guarding `E`
//! intercepts a panic only when the payload's concrete type is `E` itself.
//! `Any::downcast` provides this directly, so there is no type hierarchy to
//! blur the contract. Anything else resumes unwinding with the identical
//! payload object.

use std::{
    any::{type_name, Any},
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    panic::{self, UnwindSafe},
};

use twofold_core::Either;

/// Converts panicking computations into [`Either`] values by matching one
/// statically chosen panic payload type.
///
/// A catcher is an immutable zero-sized value: construct one per guarded
/// type and reuse it for any number of invocations, from any number of
/// threads, with no coordination.
///
/// # Examples
/// ```
/// use std::panic::panic_any;
/// use twofold_catch::catching;
/// use twofold_core::Either;
///
/// #[derive(Debug, PartialEq)]
/// struct Overdrawn(i64);
///
/// let catcher = catching::<Overdrawn>();
///
/// let ok = catcher.either(|| 100_i64);
/// assert_eq!(ok, Either::Right(100));
///
/// let failed = catcher.either(|| -> i64 { panic_any(Overdrawn(-20)) });
/// assert_eq!(failed, Either::Left(Overdrawn(-20)));
/// ```
pub struct PanicCatcher<E> {
    marker: PhantomData<fn() -> E>,
}

impl<E> Clone for PanicCatcher<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for PanicCatcher<E> {}

impl<E> Debug for PanicCatcher<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PanicCatcher<{}>", type_name::<E>())
    }
}

impl<E: Any + Send> Default for PanicCatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Any + Send> PanicCatcher<E> {
    /// Creates a catcher guarding panics whose payload type is exactly `E`.
    pub fn new() -> Self {
        PanicCatcher { marker: PhantomData }
    }

    /// Runs the computation, routing its outcome into an [`Either`].
    ///
    /// Normal completion yields `Right(result)`. A panic whose payload is
    /// exactly `E` yields `Left(payload)`. Any other panic resumes
    /// unwinding with the same payload object.
    pub fn either<R, F>(&self, op: F) -> Either<E, R>
    where
        F: FnOnce() -> R + UnwindSafe,
    {
        match panic::catch_unwind(op) {
            Ok(value) => Either::Right(value),
            Err(payload) => Either::Left(self.intercept(payload)),
        }
    }

    /// Runs the computation, routing its outcome into an `Option`.
    ///
    /// Normal completion yields `Some(result)`. A panic whose payload is
    /// exactly `E` yields `None`, discarding the payload. Any other panic
    /// resumes unwinding with the same payload object.
    pub fn optional<R, F>(&self, op: F) -> Option<R>
    where
        F: FnOnce() -> R + UnwindSafe,
    {
        match panic::catch_unwind(op) {
            Ok(value) => Some(value),
            Err(payload) => {
                self.intercept(payload);
                None
            }
        }
    }

    /// Claims a panic payload of the guarded type, resuming the unwind for
    /// any other payload.
    fn intercept(&self, payload: Box<dyn Any + Send>) -> E {
        match payload.downcast::<E>() {
            Ok(caught) => {
                tracing::trace!("intercepted panic of guarded type {}", type_name::<E>());
                *caught
            }
            Err(payload) => {
                tracing::trace!(
                    "panic payload is not {}, resuming unwind",
                    type_name::<E>()
                );
                panic::resume_unwind(payload)
            }
        }
    }
}

/// Creates a [`PanicCatcher`] guarding panics whose payload type is exactly `E`.
pub fn catching<E: Any + Send>() -> PanicCatcher<E> {
    PanicCatcher::new()
}

#[cfg(test)]
mod tests {
    use std::panic::{panic_any, AssertUnwindSafe};

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Overflow(u32);

    #[derive(Debug, PartialEq)]
    struct Underflow(u32);

    #[test]
    fn test_success_becomes_right() {
        let catcher = catching::<Overflow>();
        assert_eq!(catcher.either(|| 7_u32), Either::Right(7));
    }

    #[test]
    fn test_guarded_panic_becomes_left() {
        let catcher = catching::<Overflow>();
        let result = catcher.either(|| -> u32 { panic_any(Overflow(9)) });
        assert_eq!(result, Either::Left(Overflow(9)));
    }

    #[test]
    fn test_unguarded_panic_propagates_same_payload() {
        let catcher = catching::<Overflow>();
        let escaped = panic::catch_unwind(AssertUnwindSafe(|| {
            catcher.either(|| -> u32 { panic_any(Underflow(3)) })
        }))
        .unwrap_err();

        // the payload arrives at the call site unwrapped and unchanged
        assert_eq!(*escaped.downcast::<Underflow>().unwrap(), Underflow(3));
    }

    #[test]
    fn test_string_panics_are_not_guarded_types() {
        let catcher = catching::<Overflow>();
        let escaped = panic::catch_unwind(AssertUnwindSafe(|| {
            catcher.either(|| -> u32 { panic!("plain message") })
        }))
        .unwrap_err();

        assert_eq!(*escaped.downcast::<&str>().unwrap(), "plain message");
    }

    #[test]
    fn test_optional_present_on_success_absent_on_match() {
        let catcher = catching::<Overflow>();

        assert_eq!(catcher.optional(|| "done"), Some("done"));
        assert_eq!(catcher.optional(|| -> &str { panic_any(Overflow(1)) }), None);
    }

    #[test]
    fn test_optional_rethrows_unguarded_panic() {
        let catcher = catching::<Overflow>();
        let escaped = panic::catch_unwind(AssertUnwindSafe(|| {
            catcher.optional(|| -> u32 { panic_any(Underflow(8)) })
        }))
        .unwrap_err();

        assert_eq!(*escaped.downcast::<Underflow>().unwrap(), Underflow(8));
    }

    #[test]
    fn test_catcher_is_reusable() {
        let catcher = catching::<Overflow>();

        for n in 0..5 {
            let result = catcher.either(move || -> u32 { panic_any(Overflow(n)) });
            assert_eq!(result, Either::Left(Overflow(n)));
        }
        assert_eq!(catcher.either(|| 1_u32), Either::Right(1));
    }

    #[test]
    fn test_unboxed_numeric_results() {
        // monomorphized per result type, so numeric payloads stay unboxed
        let catcher = catching::<Overflow>();

        assert_eq!(catcher.either(|| 3_i32), Either::Right(3));
        assert_eq!(catcher.either(|| 3_i64), Either::Right(3));
        assert_eq!(catcher.either(|| 0.5_f64), Either::Right(0.5));
    }

    #[test]
    fn test_debug_names_guarded_type() {
        let catcher = catching::<Overflow>();
        assert!(format!("{:?}", catcher).contains("Overflow"));
    }
}
