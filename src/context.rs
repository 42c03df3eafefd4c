//! Cancellation contexts.
//!
//! A context carries a cancellation signal and an optional deadline down a
//! tree of tasks. Cancelling a context cancels all of its descendants; it
//! never cancels its parent. Built on [`CancellationToken`], whose child
//! tokens already give the parent-to-child propagation.
//!
//! ```no_run
//! # async fn demo() {
//! use lessons::context::{self, Context};
//! use std::time::Duration;
//!
//! let (ctx, _cancel) = context::with_timeout(&Context::background(), Duration::from_millis(10));
//! ctx.done().await;
//! assert!(ctx.err().is_some());
//! # }
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Why a context finished.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context canceled")]
    Canceled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Clone)]
pub struct Context {
    inner: Arc<Inner>,
}

struct Inner {
    token: CancellationToken,
    deadline: Option<Instant>,
    // Set before the token is cancelled, so a cancelled token always has a reason
    // here or on an ancestor.
    reason: OnceLock<ContextError>,
    parent: Option<Context>,
}

impl Context {
    /// The root context. It is never cancelled and has no deadline.
    pub fn background() -> Self {
        Context {
            inner: Arc::new(Inner {
                token: CancellationToken::new(),
                deadline: None,
                reason: OnceLock::new(),
                parent: None,
            }),
        }
    }

    fn child_of(parent: &Context, deadline: Option<Instant>) -> Self {
        Context {
            inner: Arc::new(Inner {
                token: parent.inner.token.child_token(),
                deadline,
                reason: OnceLock::new(),
                parent: Some(parent.clone()),
            }),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    pub fn is_done(&self) -> bool {
        self.inner.token.is_cancelled()
    }

    /// Resolves once this context is cancelled, by any cause.
    pub async fn done(&self) {
        self.inner.token.cancelled().await
    }

    /// `None` while the context is live, otherwise why it finished.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_done() {
            Some(self.reason())
        } else {
            None
        }
    }

    fn reason(&self) -> ContextError {
        if let Some(reason) = self.inner.reason.get() {
            return *reason;
        }
        match &self.inner.parent {
            Some(parent) if parent.is_done() => parent.reason(),
            _ => ContextError::Canceled,
        }
    }

    fn cancel_with(&self, reason: ContextError) {
        // The first cause wins; later cancels are no-ops.
        if self.is_done() {
            return;
        }
        let _ = self.inner.reason.set(reason);
        self.inner.token.cancel();
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("deadline", &self.inner.deadline)
            .field("err", &self.err())
            .finish()
    }
}

/// Cancels its context when called or dropped.
///
/// Bind it to a named variable (`_cancel`, not `_`): the `_` pattern drops
/// it straight away, cancelling the context immediately.
#[must_use = "dropping a CancelFunc cancels its context"]
pub struct CancelFunc {
    ctx: Context,
}

impl CancelFunc {
    pub fn cancel(&self) {
        self.ctx.cancel_with(ContextError::Canceled);
    }
}

impl Drop for CancelFunc {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn with_cancel(parent: &Context) -> (Context, CancelFunc) {
    let ctx = Context::child_of(parent, parent.deadline());
    (ctx.clone(), CancelFunc { ctx })
}

pub fn with_timeout(parent: &Context, timeout: Duration) -> (Context, CancelFunc) {
    with_deadline(parent, Instant::now() + timeout)
}

/// A child context that is cancelled with
/// [`ContextError::DeadlineExceeded`] once `deadline` passes.
///
/// A deadline later than the parent's is clamped to the parent's; the parent
/// will cancel the child first anyway.
///
/// # Panics
///
/// Arming the deadline timer spawns a task, so this must be called from
/// within a tokio runtime unless the deadline has already passed.
pub fn with_deadline(parent: &Context, deadline: Instant) -> (Context, CancelFunc) {
    if let Some(parent_deadline) = parent.deadline() {
        if parent_deadline <= deadline {
            return with_cancel(parent);
        }
    }

    let ctx = Context::child_of(parent, Some(deadline));

    if deadline <= Instant::now() {
        ctx.cancel_with(ContextError::DeadlineExceeded);
    } else {
        let timer = ctx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    debug!("context deadline reached");
                    timer.cancel_with(ContextError::DeadlineExceeded);
                }
                _ = timer.done() => {}
            }
        });
    }

    (ctx.clone(), CancelFunc { ctx })
}
