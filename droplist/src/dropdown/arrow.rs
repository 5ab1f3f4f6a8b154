//! Decorative arrow indicator.
//!
//! The arrow has no selection responsibility. Its presence makes the owning
//! dropdown maintain a button minimum width wide enough for every option, and
//! content changes request a button refresh.

use std::sync::{Arc, RwLock, Weak};

use super::state::{Dropdown, DropdownCore};

/// Which side of the button the arrow sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrowPosition {
    /// Before the button content.
    Left,
    /// After the button content (the default).
    #[default]
    Right,
}

#[derive(Debug)]
struct ArrowInner {
    position: ArrowPosition,
    glyph: String,
    parent: Weak<DropdownCore>,
}

/// Decorative arrow attached to a [`Dropdown`] button.
#[derive(Debug)]
pub struct Arrow {
    inner: Arc<RwLock<ArrowInner>>,
}

impl Arrow {
    /// Create an arrow with the default glyph and position.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ArrowInner {
                position: ArrowPosition::default(),
                glyph: "▾".to_string(),
                parent: Weak::new(),
            })),
        }
    }

    /// Create an arrow on a specific side.
    pub fn with_position(position: ArrowPosition) -> Self {
        let arrow = Self::new();
        if let Ok(mut guard) = arrow.inner.write() {
            guard.position = position;
        }
        arrow
    }

    /// Get the arrow position.
    pub fn position(&self) -> ArrowPosition {
        self.inner
            .read()
            .map(|guard| guard.position)
            .unwrap_or_default()
    }

    /// Move the arrow to the other side.
    pub fn set_position(&self, position: ArrowPosition) {
        if let Ok(mut guard) = self.inner.write() {
            guard.position = position;
        }
    }

    /// Get the glyph.
    pub fn glyph(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.glyph.clone())
            .unwrap_or_default()
    }

    /// Replace the glyph and request a button re-render from the owner.
    pub fn set_glyph(&self, glyph: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.glyph = glyph.into();
        }
        if let Some(parent) = self.parent() {
            parent.refresh_button();
        }
    }

    /// Locate the owning dropdown, if attached.
    pub fn parent(&self) -> Option<Dropdown> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.parent.upgrade())
            .map(Dropdown::from_core)
    }

    pub(crate) fn set_parent(&self, parent: Weak<DropdownCore>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.parent = parent;
        }
    }
}

impl Clone for Arrow {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for Arrow {
    fn default() -> Self {
        Self::new()
    }
}
