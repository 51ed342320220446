//! Resolute: explicit outcomes for handled failures
//!
//! Resolute replaces implicit failure signaling at call boundaries with an
//! inspectable value. A wrapped operation never raises a failure you declared
//! you can handle; it returns an [`Outcome`] instead, and everything you did
//! not declare keeps propagating through the native error channel untouched.
//!
//! # Core Concepts
//!
//! - **Outcome**: the two-variant `Success`/`Failure` value a wrapped
//!   operation settles to
//! - **Handled family**: the set of error types a wrapper captures as data,
//!   declared by implementing the [`Handled`] marker trait
//! - **Wrapping combinator**: [`wrap`] for immediate operations and
//!   [`wrap_async`] for deferred ones, sharing one classification
//!
//! # Example
//!
//! ```rust
//! use resolute::{handled_error, wrap, Handled, Outcome, Wrapped};
//!
//! handled_error! {
//!     pub enum MathError {
//!         #[error("Cannot divide by zero")]
//!         DivisionByZero,
//!     }
//! }
//!
//! let divide: Wrapped<(i64, i64), f64, MathError> = wrap(|(a, b): (i64, i64)| {
//!     if b == 0 {
//!         return Err(MathError::DivisionByZero.raised());
//!     }
//!     Ok(a as f64 / b as f64)
//! });
//!
//! match divide.call((10, 2))? {
//!     Outcome::Success(value) => assert_eq!(value, 5.0),
//!     Outcome::Failure(error) => panic!("unexpected failure: {error}"),
//! }
//!
//! let outcome = divide.call((10, 0))?;
//! assert_eq!(outcome, Outcome::Failure(MathError::DivisionByZero));
//! # Ok::<(), resolute::Raised>(())
//! ```

pub mod core;
pub mod wrap;

// Re-export commonly used types
pub use core::{Handled, Outcome, Raised, VariantMismatch};
pub use wrap::{wrap, wrap_async, Wrapped, WrappedAsync};
