//! Extraction errors for the outcome type.

use thiserror::Error;

/// Signalled when a caller extracts the wrong variant's payload from an
/// [`Outcome`](crate::core::Outcome).
///
/// Wrong-direction extraction never coerces or returns a placeholder; it
/// always surfaces as this distinct error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariantMismatch {
    /// Asked for the success value of a `Failure`.
    #[error("expected Success, found Failure: {0}")]
    ExpectedSuccess(String),

    /// Asked for the failure payload of a `Success`.
    #[error("expected Failure, found Success")]
    ExpectedFailure,
}
