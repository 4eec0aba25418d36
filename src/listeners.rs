//! Gesture-scoped pointer subscriptions.
//!
//! When a gesture starts, the board asks its `GestureListeners` host to
//! register exactly one document-level move handler and one up handler.
//! The host hands back a `ListenerGuard`; the board keeps it inside the
//! active gesture and drops it when the gesture ends, which removes both
//! handlers. A gesture therefore cannot outlive its subscriptions, and a
//! subscription cannot outlive its gesture.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::fmt;

use crate::gesture::GestureKind;

/// Registers global pointer-move/pointer-up handlers for one gesture.
pub trait GestureListeners {
    /// Register handlers for a gesture of `kind`. Dropping the returned guard
    /// must remove them.
    fn attach(&mut self, kind: GestureKind) -> ListenerGuard;
}

/// Owns one gesture's subscriptions; removes them on drop.
pub struct ListenerGuard {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Guard that runs `detach` exactly once when dropped.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    /// Guard with nothing to remove.
    #[must_use]
    pub fn detached() -> Self {
        Self { detach: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("attached", &self.detach.is_some()).finish()
    }
}

/// For hosts that already route every pointer event to the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoListeners;

impl GestureListeners for NoListeners {
    fn attach(&mut self, _kind: GestureKind) -> ListenerGuard {
        ListenerGuard::detached()
    }
}
