//! Handled-error family membership.
//!
//! Error types opt into capture by implementing the `Handled` marker trait.
//! Failures of any other type travel the native error channel untouched.

use std::error::Error;

/// Type-erased payload of the native failure channel.
///
/// Operations handed to the wrapping combinator signal failure by returning
/// `Err(Raised)`. Classification then decides whether the payload becomes
/// [`Outcome::Failure`](crate::core::Outcome) data or keeps propagating.
pub type Raised = Box<dyn Error + Send + Sync + 'static>;

/// Marker trait declaring membership in the handled-error family.
///
/// Only failures whose concrete type implements `Handled` are captured as
/// [`Outcome::Failure`](crate::core::Outcome) by a wrapper; everything else
/// (programming defects, failures from unrelated subsystems) re-raises
/// through the wrapper unchanged.
///
/// Membership is explicit: a type joins the family by implementing the trait,
/// never by structural accident. The family a given wrapper captures is fixed
/// by its `E` type parameter, so misdeclaring the family is a compile error
/// at the wrap site.
///
/// # Example
///
/// ```rust
/// use resolute::{Handled, Raised};
/// use thiserror::Error;
///
/// #[derive(Debug, Error)]
/// #[error("rate limit exceeded")]
/// struct RateLimited;
///
/// impl Handled for RateLimited {}
///
/// // A handled error moves onto the native channel with `raised()`.
/// let signal: Raised = RateLimited.raised();
/// assert_eq!(signal.to_string(), "rate limit exceeded");
/// ```
pub trait Handled: Error + Send + Sync + 'static {
    /// Move this error onto the native failure channel.
    ///
    /// Shorthand for boxing at a raise site:
    /// `Err(DivisionByZero.raised())`.
    fn raised(self) -> Raised
    where
        Self: Sized,
    {
        Box::new(self)
    }
}
