//! Values that settle asynchronously

use super::Value;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;
use std::sync::Arc;

/// Error a deferred value rejects with
///
/// Shared so the same allocation can travel through a failed check and be
/// compared by identity afterwards.
pub type Rejection = Arc<dyn std::error::Error + Send + Sync>;

/// Final state of a deferred value
pub type Settlement = Result<Value, Rejection>;

/// Wrap any error as a [`Rejection`]
pub fn rejection<E>(err: E) -> Rejection
where
    E: std::error::Error + Send + Sync + 'static,
{
    Arc::new(err)
}

/// A shareable computation producing a [`Value`] or a [`Rejection`]
///
/// Clones observe the same settlement; the underlying future runs once, the
/// first time any clone is awaited.
#[derive(Clone)]
pub struct Deferred {
    inner: Shared<BoxFuture<'static, Settlement>>,
}

impl Deferred {
    /// Defer an arbitrary future
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Settlement> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// Already fulfilled with `value`
    pub fn resolved(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(async move { Ok(value) })
    }

    /// Already rejected with `rejection`
    pub fn rejected(rejection: Rejection) -> Self {
        Self::new(async move { Err(rejection) })
    }

    /// Wait for the value to settle
    pub async fn settle(&self) -> Settlement {
        self.inner.clone().await
    }

    /// Settlement if the value already settled, without polling
    pub fn peek(&self) -> Option<&Settlement> {
        self.inner.peek()
    }

    /// Whether both handles share the same underlying computation
    pub fn ptr_eq(&self, other: &Deferred) -> bool {
        Shared::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Deferred {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.peek() {
            None => "pending",
            Some(Ok(_)) => "resolved",
            Some(Err(_)) => "rejected",
        };
        f.debug_struct("Deferred").field("state", &state).finish()
    }
}
