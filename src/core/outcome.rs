//! The two-variant outcome value produced by wrapped operations.
//!
//! An `Outcome` is constructed exactly once, when a wrapped operation
//! settles, and is then plain immutable data: no retries, no intermediate
//! states, no special runtime behavior.

use super::error::VariantMismatch;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Explicit result of a wrapped operation: either the value it produced or
/// the handled failure it raised.
///
/// The intended consumption pattern is an exhaustive `match` over the two
/// variants; [`fold`](Outcome::fold) offers the same dispatch as a visitor
/// when a closed-over handler per variant reads better.
///
/// # Required Traits on Payloads
///
/// The enum itself carries no bounds. Individual methods require only what
/// they use: `Display` on the error to render a mismatch, `Debug` for the
/// panicking extractors, serde traits for (de)serialization.
///
/// # Example
///
/// ```rust
/// use resolute::{Outcome, VariantMismatch};
///
/// let success: Outcome<u32, String> = Outcome::Success(42);
/// let failure: Outcome<u32, String> = Outcome::Failure("boom".to_string());
///
/// assert!(success.is_success());
/// assert!(failure.is_failure());
///
/// match success {
///     Outcome::Success(value) => assert_eq!(value, 42),
///     Outcome::Failure(error) => panic!("unexpected failure: {error}"),
/// }
///
/// // Wrong-direction extraction fails loudly, never silently.
/// assert_eq!(
///     failure.value(),
///     Err(VariantMismatch::ExpectedSuccess("boom".to_string()))
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome<V, E> {
    /// The operation completed normally with this value.
    Success(V),

    /// The operation raised this member of the handled-error family.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Check whether this outcome is a `Success`, non-destructively.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check whether this outcome is a `Failure`, non-destructively.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the failure payload.
    ///
    /// Returns [`VariantMismatch::ExpectedFailure`] on a `Success`.
    pub fn error(&self) -> Result<&E, VariantMismatch> {
        match self {
            Self::Success(_) => Err(VariantMismatch::ExpectedFailure),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Consume the outcome, yielding the failure payload.
    ///
    /// Returns [`VariantMismatch::ExpectedFailure`] on a `Success`.
    pub fn into_error(self) -> Result<E, VariantMismatch> {
        match self {
            Self::Success(_) => Err(VariantMismatch::ExpectedFailure),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Consume the outcome with one handler per variant.
    ///
    /// Exactly one handler runs. This is the fold/visitor form of the
    /// exhaustive `match`; no variant can be silently ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resolute::Outcome;
    ///
    /// let outcome: Outcome<u32, String> = Outcome::Success(41);
    /// let rendered = outcome.fold(
    ///     |value| format!("got {}", value + 1),
    ///     |error| format!("failed: {error}"),
    /// );
    /// assert_eq!(rendered, "got 42");
    /// ```
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(V) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }
}

impl<V, E: Display> Outcome<V, E> {
    /// Borrow the success value.
    ///
    /// Returns [`VariantMismatch::ExpectedSuccess`] on a `Failure`, carrying
    /// the rendered failure payload.
    pub fn value(&self) -> Result<&V, VariantMismatch> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(VariantMismatch::ExpectedSuccess(error.to_string())),
        }
    }

    /// Consume the outcome, yielding the success value.
    ///
    /// Returns [`VariantMismatch::ExpectedSuccess`] on a `Failure`.
    pub fn into_value(self) -> Result<V, VariantMismatch> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(VariantMismatch::ExpectedSuccess(error.to_string())),
        }
    }
}

impl<V, E: Debug> Outcome<V, E> {
    /// Consume the outcome, yielding the success value.
    ///
    /// # Panics
    ///
    /// Panics on a `Failure`, with the failure payload in the message.
    pub fn unwrap(self) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure`: {error:?}")
            }
        }
    }
}

impl<V: Debug, E> Outcome<V, E> {
    /// Consume the outcome, yielding the failure payload.
    ///
    /// # Panics
    ///
    /// Panics on a `Success`, with the success value in the message.
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success`: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }
}
