#![warn(missing_docs)]

//! Function-shape helpers for twofold pipelines.
//!
//! This crate provides optional convenience utilities for reshaping
//! two-argument functions:
//!
//! - argument swapping (`swap_args`)
//! - currying and uncurrying (`curried`, `uncurried`)
//!
//! Because Rust closures unify functions, consumers (`R = ()`), and
//! predicates (`R = bool`), each helper covers all three shapes with one
//! generic signature.
//!
//! These utilities are provided as a separate crate to keep the core
//! library dependency-free.

/// Reverses the argument order of a two-argument function.
///
/// # Examples
/// ```
/// use twofold_utilities::swap_args;
///
/// let divide = |a: f64, b: f64| a / b;
/// let mut divide_into = swap_args(divide);
///
/// assert_eq!(divide_into(2.0, 10.0), 5.0);
/// ```
pub fn swap_args<A, B, R, F: FnMut(A, B) -> R>(mut f: F) -> impl FnMut(B, A) -> R {
    move |b, a| f(a, b)
}

/// Splits a two-argument function into a chain of one-argument functions.
///
/// The returned outer function can be called any number of times; each call
/// captures its first argument and yields an independent inner function.
///
/// # Examples
/// ```
/// use twofold_utilities::curried;
///
/// let add = |a: i32, b: i32| a + b;
/// let add_curried = curried(add);
/// let add_two = add_curried(2);
///
/// assert_eq!(add_two(3), 5);
/// assert_eq!(add_two(40), 42);
/// assert_eq!(add_curried(10)(10), 20);
/// ```
pub fn curried<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    A: Clone + 'static,
    F: Fn(A, B) -> R + Clone + 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Collapses a chain of one-argument functions into a two-argument function.
///
/// Inverse of [`curried`].
///
/// # Examples
/// ```
/// use twofold_utilities::{curried, uncurried};
///
/// let concat = |a: String, b: String| a + &b;
/// let round_trip = uncurried(curried(concat));
///
/// assert_eq!(round_trip("ab".to_string(), "cd".to_string()), "abcd");
/// ```
pub fn uncurried<A, B, R, G, F>(f: F) -> impl Fn(A, B) -> R
where
    G: Fn(B) -> R,
    F: Fn(A) -> G,
{
    move |a, b| f(a)(b)
}
