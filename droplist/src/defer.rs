//! Run-after-dispatch queue.
//!
//! Closing the list and restoring button focus after a user-driven selection
//! must not happen inside the originating click/keydown handler. Instead of a
//! timer, actions are queued here and drained when the outermost public
//! dispatch entry point returns.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An action deferred until the current dispatch completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeferredAction {
    /// Close the option list.
    CloseList,
    /// Return focus to the dropdown button.
    RestoreFocus,
}

/// Queue of deferred actions with a dispatch-depth guard.
///
/// Entry points call `enter()` on the way in and `exit()` on the way out;
/// queued actions are only released once the outermost entry point exits, so
/// nested dispatches (Enter confirming a highlighted option routes through
/// the option's click path) drain exactly once.
#[derive(Debug, Default)]
pub(crate) struct DeferQueue {
    depth: AtomicUsize,
    queue: Mutex<Vec<DeferredAction>>,
}

impl DeferQueue {
    /// Mark the start of a dispatch.
    pub(crate) fn enter(&self) {
        self.depth.fetch_add(1, Ordering::SeqCst);
    }

    /// Mark the end of a dispatch.
    ///
    /// Returns the queued actions when this was the outermost dispatch,
    /// otherwise an empty list.
    pub(crate) fn exit(&self) -> Vec<DeferredAction> {
        if self.depth.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.queue
                .lock()
                .map(|mut queue| std::mem::take(&mut *queue))
                .unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    /// Queue an action. Duplicate actions within one dispatch collapse.
    pub(crate) fn push(&self, action: DeferredAction) {
        if let Ok(mut queue) = self.queue.lock()
            && !queue.contains(&action)
        {
            queue.push(action);
        }
    }
}
