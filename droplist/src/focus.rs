//! Focus tracking shared between a dropdown and its nested children.

use std::sync::{Arc, RwLock};

/// Unique identifier for a focusable element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    /// Create a new focus ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for FocusId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FocusId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Focus state for one dropdown tree.
///
/// Tracks which element currently holds focus. The host moves focus here;
/// dropdowns read it back and the deferred restore after a user-driven
/// selection writes the button's ID into it.
#[derive(Debug, Default)]
pub struct FocusState {
    /// Currently focused element ID
    current: Option<FocusId>,
    /// Whether focus changed since the last check
    focus_changed: bool,
}

impl FocusState {
    /// Create a new focus state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element
    pub fn current(&self) -> Option<&FocusId> {
        self.current.as_ref()
    }

    /// Check if an element is focused
    pub fn is_focused(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|current| current.0 == id)
    }

    /// Set focus to a specific element
    pub fn set_focus(&mut self, id: impl Into<FocusId>) {
        self.current = Some(id.into());
        self.focus_changed = true;
    }

    /// Clear focus
    pub fn clear_focus(&mut self) {
        self.current = None;
        self.focus_changed = true;
    }

    /// Check and reset the focus-changed flag
    pub fn take_focus_changed(&mut self) -> bool {
        std::mem::take(&mut self.focus_changed)
    }
}

/// Clonable handle to a shared [`FocusState`].
///
/// A dropdown creates its own handle at construction; nesting a child
/// dropdown rebinds the child onto the parent's handle so the whole tree
/// agrees on where focus is.
#[derive(Debug, Clone, Default)]
pub struct FocusHandle {
    inner: Arc<RwLock<FocusState>>,
}

impl FocusHandle {
    /// Create a handle around a fresh focus state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element.
    pub fn current(&self) -> Option<FocusId> {
        self.inner
            .read()
            .map(|guard| guard.current().cloned())
            .unwrap_or(None)
    }

    /// Check if an element is focused.
    pub fn is_focused(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_focused(id))
            .unwrap_or(false)
    }

    /// Set focus to a specific element.
    pub fn set_focus(&self, id: impl Into<FocusId>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.set_focus(id);
        }
    }

    /// Clear focus.
    pub fn clear_focus(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.clear_focus();
        }
    }

    /// Check and reset the focus-changed flag.
    pub fn take_focus_changed(&self) -> bool {
        self.inner
            .write()
            .map(|mut guard| guard.take_focus_changed())
            .unwrap_or(false)
    }
}
