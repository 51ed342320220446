//! Deferred-result adapter.

use crate::core::{Handled, Outcome, Raised};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Wrapper around a deferred operation.
///
/// The deferred twin of [`Wrapped`](crate::wrap::Wrapped): invoking the
/// wrapper returns a deferred handle, and resolving that handle performs the
/// same classification as the immediate path. The calling convention is fixed
/// when the wrapper is constructed, so callers always see the convention of
/// the underlying operation.
///
/// Classification happens strictly after the inner future settles, exactly
/// once per invocation. Dropping the handle before it settles drops the
/// inner future; a cancelled call never produces an `Outcome`, the
/// cancellation surfaces through the caller's runtime instead.
pub struct WrappedAsync<Args, V, E> {
    op: Arc<dyn Fn(Args) -> BoxFuture<'static, Result<V, Raised>> + Send + Sync>,
    family: PhantomData<fn() -> E>,
}

impl<Args, V, E: Handled> WrappedAsync<Args, V, E> {
    /// Wrap a deferred operation.
    ///
    /// Stores the operation behind a factory that boxes each invocation's
    /// future, so one wrapper can be called any number of times.
    pub fn new<F, Fut>(op: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, Raised>> + Send + 'static,
    {
        WrappedAsync {
            op: Arc::new(move |args| op(args).boxed()),
            family: PhantomData,
        }
    }

    /// Invoke the wrapped operation with the supplied arguments.
    ///
    /// Awaits the inner operation, then applies the same
    /// success/handled-failure/re-raise classification as the immediate
    /// path.
    pub async fn call(&self, args: Args) -> Result<Outcome<V, E>, Raised> {
        let settled = (self.op)(args).await;
        super::classify(settled)
    }
}

impl<Args, V, E> Clone for WrappedAsync<Args, V, E> {
    fn clone(&self) -> Self {
        Self {
            op: Arc::clone(&self.op),
            family: PhantomData,
        }
    }
}
