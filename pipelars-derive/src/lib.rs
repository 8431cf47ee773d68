//! Procedural macros for pipelars function composition.
//!
//! This crate provides the expansion-time half of the pipelars toolkit:
//! arity-driven currying and positional partial application. Both macros
//! are re-exported by the `pipelars` crate and are meant to be used from
//! there.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a closure or a named function into curried form
//! - [`partial!`]: Fixes some arguments of a callable, leaving `__`
//!   placeholders as parameters of the produced closure
//!
//! # Example: Currying
//!
//! ```rust,ignore
//! use pipelars::curry;
//!
//! let add = curry!(|a: i32, b: i32, c: i32| a + b + c);
//! assert_eq!(add(1)(2)(3), 6);
//!
//! // Named functions carry no arity information, so it is spelled out:
//! fn multiply(a: i32, b: i32) -> i32 { a * b }
//! let curried = curry!(multiply, 2);
//! assert_eq!(curried(6)(7), 42);
//! ```
//!
//! # Example: Partial Application
//!
//! ```rust,ignore
//! use pipelars::partial;
//!
//! fn add(a: i32, b: i32, c: i32) -> i32 { a + b + c }
//!
//! let add_three = partial!(add, 1, 2, __);
//! assert_eq!(add_three(3), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod partial;

use proc_macro::TokenStream;

/// Converts a multi-argument callable into curried form.
///
/// Currying transforms a callable of arity N into a chain of N closures,
/// each taking a single argument. Supplying the final argument invokes the
/// original callable with every argument accumulated along the chain.
///
/// # Input Forms
///
/// - `curry!(|a, b| body)` — the arity is read off the closure's parameter
///   list.
/// - `curry!(callable, arity)` — any callable expression (a function path,
///   a bound closure variable) with the arity spelled out as an integer
///   literal, since Rust expressions carry no arity information.
///
/// An arity below 2 is rejected at expansion time; so is a closure whose
/// parameter count contradicts an explicitly supplied arity.
///
/// # Accumulation Semantics
///
/// Every partial application owns an independent, shared view of the
/// arguments applied so far. Two partial applications derived from the
/// same prefix never observe each other, and any link of the chain can be
/// reused:
///
/// ```rust,ignore
/// use pipelars::curry;
///
/// let multiply = curry!(|first: i32, second: i32| first * second);
/// let double = multiply(2);
/// let triple = multiply(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// assert_eq!(double(7), 14); // double is unaffected by triple
/// ```
///
/// # Type Constraints
///
/// All arguments except the last must implement `Clone`: the generated
/// chain shares applied prefixes through `Rc` and clones them out on final
/// invocation, which is what makes partial applications reusable. The last
/// argument is passed straight through and is unconstrained.
///
/// # Generated Code
///
/// `curry!(add, 3)` expands to (simplified):
///
/// ```rust,ignore
/// {
///     let callable = Rc::new(add);
///     move |a| {
///         let callable = Rc::clone(&callable);
///         let a = Rc::new(a);
///         move |b| {
///             let callable = Rc::clone(&callable);
///             let a = Rc::clone(&a);
///             let b = Rc::new(b);
///             move |c| callable(
///                 Rc::unwrap_or_clone(Rc::clone(&a)),
///                 Rc::unwrap_or_clone(Rc::clone(&b)),
///                 c,
///             )
///         }
///     }
/// }
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input)
}

/// Fixes some arguments of a callable, producing a closure over the rest.
///
/// Positions written as `__` (double underscore, used as a literal token —
/// nothing to import) stay open and become parameters of the produced
/// closure, in order. Bound argument expressions are evaluated once, at
/// construction time, and cloned into each call so the partial application
/// is reusable.
///
/// # Usage
///
/// ```rust,ignore
/// use pipelars::partial;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
///
/// // Fix the second argument instead of the first
/// let add_to_ten = partial!(add, __, 10);
/// assert_eq!(add_to_ten(3), 13);
///
/// // Several open positions
/// fn join(a: i32, b: i32, c: i32) -> i32 { a * 100 + b * 10 + c }
/// let outer = partial!(join, __, 5, __);
/// assert_eq!(outer(1, 2), 152);
/// ```
///
/// # All Positions Bound
///
/// Binding every argument yields a zero-argument thunk, which defers the
/// call rather than performing it:
///
/// ```rust,ignore
/// let thunk = partial!(add, 2, 3);
/// assert_eq!(thunk(), 5);
/// ```
///
/// # Type Constraints
///
/// Bound argument values must implement `Clone`; open arguments are passed
/// straight through and are unconstrained.
#[proc_macro]
pub fn partial(input: TokenStream) -> TokenStream {
    partial::expand(input)
}
