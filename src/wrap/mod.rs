//! The wrapping combinator.
//!
//! Converts "may raise" into "always returns an `Outcome`" without changing
//! the operation's input contract. Two adapters, selected once at wrap time
//! by the operation's calling convention:
//!
//! - [`Wrapped`]: immediate operations (`Fn(Args) -> Result<V, Raised>`)
//! - [`WrappedAsync`]: deferred operations (futures)
//!
//! Both share one classification point: a raised failure whose concrete type
//! is a [`Handled`] family member becomes [`Outcome::Failure`]; every other
//! failure keeps travelling the native channel, unchanged. The adapters hold
//! no state across invocations and add no side effects of their own.

mod deferred;
mod immediate;
pub mod macros;

pub use deferred::WrappedAsync;
pub use immediate::Wrapped;

use crate::core::{Handled, Outcome, Raised};
use std::future::Future;

/// Classify a settled operation result.
///
/// Single point of classification for both adapters. The downcast either
/// recovers the original boxed payload (no copy, no re-wrap) or returns the
/// untouched box for re-raising.
pub(crate) fn classify<V, E: Handled>(
    settled: Result<V, Raised>,
) -> Result<Outcome<V, E>, Raised> {
    match settled {
        Ok(value) => Ok(Outcome::Success(value)),
        Err(raised) => match raised.downcast::<E>() {
            Ok(handled) => Ok(Outcome::Failure(*handled)),
            Err(raised) => Err(raised),
        },
    }
}

/// Wrap an immediate operation. Shorthand for [`Wrapped::new`].
///
/// # Example
///
/// ```rust
/// use resolute::{handled_error, wrap, Handled, Outcome, Wrapped};
///
/// handled_error! {
///     pub enum MathError {
///         #[error("Cannot divide by zero")]
///         DivisionByZero,
///     }
/// }
///
/// let divide: Wrapped<(i64, i64), f64, MathError> = wrap(|(a, b): (i64, i64)| {
///     if b == 0 {
///         return Err(MathError::DivisionByZero.raised());
///     }
///     Ok(a as f64 / b as f64)
/// });
///
/// assert_eq!(divide.call((10, 2))?, Outcome::Success(5.0));
/// assert!(divide.call((10, 0))?.is_failure());
/// # Ok::<(), resolute::Raised>(())
/// ```
pub fn wrap<Args, V, E, F>(op: F) -> Wrapped<Args, V, E>
where
    E: Handled,
    F: Fn(Args) -> Result<V, Raised> + Send + Sync + 'static,
{
    Wrapped::new(op)
}

/// Wrap a deferred operation. Shorthand for [`WrappedAsync::new`].
pub fn wrap_async<Args, V, E, F, Fut>(op: F) -> WrappedAsync<Args, V, E>
where
    E: Handled,
    F: Fn(Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<V, Raised>> + Send + 'static,
{
    WrappedAsync::new(op)
}
