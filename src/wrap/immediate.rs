//! Immediate-result adapter.

use crate::core::{Handled, Outcome, Raised};
use std::marker::PhantomData;
use std::sync::Arc;

/// Wrapper around an immediate operation.
///
/// `Args` is the operation's input (a tuple for more than one argument), `V`
/// its value type, and `E` the handled-error family this wrapper captures.
/// Invoking the wrapper via [`call`](Wrapped::call) runs the operation with
/// the supplied arguments and classifies whatever it settles to; arguments,
/// side effects, and unhandled failures pass through untouched.
///
/// Wrappers are stateless classifiers: each call is independent, and cloning
/// shares the underlying operation.
pub struct Wrapped<Args, V, E> {
    op: Arc<dyn Fn(Args) -> Result<V, Raised> + Send + Sync>,
    family: PhantomData<fn() -> E>,
}

impl<Args, V, E: Handled> Wrapped<Args, V, E> {
    /// Wrap an immediate operation.
    ///
    /// The handled family `E` is fixed here, once, for every subsequent
    /// call; a family that is not an error type fails to compile at this
    /// site rather than misclassifying later.
    pub fn new<F>(op: F) -> Self
    where
        F: Fn(Args) -> Result<V, Raised> + Send + Sync + 'static,
    {
        Wrapped {
            op: Arc::new(op),
            family: PhantomData,
        }
    }

    /// Invoke the wrapped operation with the supplied arguments.
    ///
    /// Normal completion returns `Ok(Outcome::Success)`; a raised failure in
    /// the `E` family returns `Ok(Outcome::Failure)` carrying the original
    /// payload; any other raised failure is re-raised as `Err`, unchanged,
    /// for the caller to propagate with `?`.
    pub fn call(&self, args: Args) -> Result<Outcome<V, E>, Raised> {
        super::classify((self.op)(args))
    }
}

impl<Args, V, E> Clone for Wrapped<Args, V, E> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
            family: PhantomData,
        }
    }
}
