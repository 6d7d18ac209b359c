//! Single-resolution deferred values.
//!
//! A `Deferred<T>` is a future that resolves at most once and never
//! errors. The matching `DeferredHandle<T>` is cloneable so two dialog
//! buttons can race to resolve the same deferred; only the first
//! resolution counts. If no handle ever resolves (for example the user
//! dismisses a confirm dialog via the backdrop), the future simply stays
//! pending; there is no rejection path.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};

struct Inner<T> {
    value: Option<T>,
    resolved: bool,
    waker: Option<Waker>,
}

/// A future resolved by a `DeferredHandle`.
pub struct Deferred<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

/// Resolver side of a `Deferred`. Cloneable; first resolution wins.
pub struct DeferredHandle<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for DeferredHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Deferred<T> {
    /// Create a deferred and its resolver handle.
    pub fn new() -> (Self, DeferredHandle<T>) {
        let inner = Arc::new(Mutex::new(Inner {
            value: None,
            resolved: false,
            waker: None,
        }));
        (
            Self {
                inner: Arc::clone(&inner),
            },
            DeferredHandle { inner },
        )
    }

    /// Whether a resolution has happened (even if not yet polled out).
    pub fn is_resolved(&self) -> bool {
        self.inner.lock().map(|inner| inner.resolved).unwrap_or(false)
    }
}

impl<T> DeferredHandle<T> {
    /// Resolve the deferred. A second resolution (from either this handle
    /// or a clone) is silently ignored.
    pub fn resolve(&self, value: T) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if inner.resolved {
            return;
        }
        inner.resolved = true;
        inner.value = Some(value);
        if let Some(waker) = inner.waker.take() {
            waker.wake();
        }
    }

    /// Whether the deferred has already been resolved.
    pub fn is_resolved(&self) -> bool {
        self.inner.lock().map(|inner| inner.resolved).unwrap_or(false)
    }
}

impl<T> Future for Deferred<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let Ok(mut inner) = self.inner.lock() else {
            return Poll::Pending;
        };
        match inner.value.take() {
            Some(value) => Poll::Ready(value),
            None => {
                inner.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}
