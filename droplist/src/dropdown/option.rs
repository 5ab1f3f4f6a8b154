//! Selectable option items.
//!
//! An option owns its own label/value/content and flags and reports local
//! changes upward to its owning dropdown through a weak, non-owning backref.
//! Once detached, the backref goes dead and further notifications are no-ops.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::event::EventResult;

use super::state::{Dropdown, DropdownCore};

/// Unique identifier for an option instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(usize);

impl OptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__option_{}", self.0)
    }
}

/// Internal state for an option.
#[derive(Debug)]
pub(crate) struct OptionInner {
    /// Display override shown on the button instead of the content.
    label: Option<String>,
    /// Explicit value; resolution falls back to the text content.
    value: Option<String>,
    /// Text content.
    text: String,
    /// Decorative class list, carried onto the button surface when selected.
    classes: Vec<String>,
    /// Selection flag. At most one flagged option per dropdown.
    selected: bool,
    /// Blocks click-selection (not programmatic selection).
    disabled: bool,
    /// Fallback display when nothing is selected.
    placeholder: bool,
    /// User-owned visibility flag.
    hidden: bool,
    /// Dropdown-owned visibility flag (`show_selected_on = button`).
    hidden_internal: bool,
    /// Dropdown-owned keyboard/mouse highlight.
    preselected: bool,
    /// Marks the reserved display mirror owned by the dropdown.
    button_content: bool,
    /// Owning dropdown, located structurally. Dead once detached.
    parent: Weak<DropdownCore>,
}

/// Shared core behind the clonable option handle.
#[derive(Debug)]
pub(crate) struct OptionCore {
    pub(crate) id: OptionId,
    pub(crate) inner: RwLock<OptionInner>,
}

/// One selectable item beneath a [`Dropdown`].
///
/// Mutators run the local change hook: while the option carries `selected`
/// (or is the placeholder currently being displayed) every content mutation
/// asks the parent dropdown to reconcile, so the button surface never drifts
/// from the option it mirrors.
#[derive(Debug)]
pub struct DropdownOption {
    pub(crate) core: Arc<OptionCore>,
}

impl DropdownOption {
    /// Create a new option with the given text content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            core: Arc::new(OptionCore {
                id: OptionId::new(),
                inner: RwLock::new(OptionInner {
                    label: None,
                    value: None,
                    text: text.into(),
                    classes: Vec::new(),
                    selected: false,
                    disabled: false,
                    placeholder: false,
                    hidden: false,
                    hidden_internal: false,
                    preselected: false,
                    button_content: false,
                    parent: Weak::new(),
                }),
            }),
        }
    }

    /// Create an option with an explicit value.
    pub fn with_value(text: impl Into<String>, value: impl Into<String>) -> Self {
        let option = Self::new(text);
        if let Ok(mut guard) = option.core.inner.write() {
            guard.value = Some(value.into());
        }
        option
    }

    /// Create an option with a display label override.
    pub fn with_label(text: impl Into<String>, label: impl Into<String>) -> Self {
        let option = Self::new(text);
        if let Ok(mut guard) = option.core.inner.write() {
            guard.label = Some(label.into());
        }
        option
    }

    /// Create the reserved display mirror for a dropdown.
    pub(crate) fn new_button_content(parent: Weak<DropdownCore>) -> Self {
        let option = Self::new("");
        if let Ok(mut guard) = option.core.inner.write() {
            guard.button_content = true;
            guard.parent = parent;
        }
        option
    }

    /// Get the unique ID for this option.
    pub fn id(&self) -> OptionId {
        self.core.id
    }

    /// Get the ID as a string (focus/containment lookups).
    pub fn id_string(&self) -> String {
        self.core.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the text content.
    pub fn text(&self) -> String {
        self.core
            .inner
            .read()
            .map(|guard| guard.text.clone())
            .unwrap_or_default()
    }

    /// Get the display label override (if any).
    pub fn label(&self) -> Option<String> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.label.clone())
    }

    /// Resolve the option's value: the explicit value if present, `None` for
    /// a placeholder with no explicit value, the text content otherwise.
    pub fn value(&self) -> Option<String> {
        self.core.inner.read().ok().and_then(|guard| {
            if let Some(value) = &guard.value {
                Some(value.clone())
            } else if guard.placeholder {
                None
            } else {
                Some(guard.text.clone())
            }
        })
    }

    /// Get the decorative class list.
    pub fn classes(&self) -> Vec<String> {
        self.core
            .inner
            .read()
            .map(|guard| guard.classes.clone())
            .unwrap_or_default()
    }

    /// Check the selection flag.
    pub fn is_selected(&self) -> bool {
        self.read_flag(|inner| inner.selected)
    }

    /// Check whether click-selection is blocked.
    pub fn is_disabled(&self) -> bool {
        self.read_flag(|inner| inner.disabled)
    }

    /// Check the placeholder flag.
    pub fn is_placeholder(&self) -> bool {
        self.read_flag(|inner| inner.placeholder)
    }

    /// Check the user-owned hidden flag.
    pub fn is_hidden(&self) -> bool {
        self.read_flag(|inner| inner.hidden)
    }

    /// Check the dropdown-owned hidden flag.
    pub fn is_hidden_internal(&self) -> bool {
        self.read_flag(|inner| inner.hidden_internal)
    }

    /// Check the dropdown-owned highlight flag.
    pub fn is_preselected(&self) -> bool {
        self.read_flag(|inner| inner.preselected)
    }

    /// Check whether this is a dropdown's reserved display mirror.
    pub fn is_button_content(&self) -> bool {
        self.read_flag(|inner| inner.button_content)
    }

    fn read_flag(&self, f: impl FnOnce(&OptionInner) -> bool) -> bool {
        self.core.inner.read().map(|guard| f(&guard)).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods (each runs the local change hook)
    // -------------------------------------------------------------------------

    /// Set the text content.
    pub fn set_text(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.text = text.into();
        }
        self.sync_parent();
    }

    /// Set the display label override.
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.label = Some(label.into());
        }
        self.sync_parent();
    }

    /// Remove the display label override.
    pub fn clear_label(&self) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.label = None;
        }
        self.sync_parent();
    }

    /// Set the explicit value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.value = Some(value.into());
        }
        self.sync_parent();
    }

    /// Remove the explicit value, falling back to content resolution.
    pub fn clear_value(&self) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.value = None;
        }
        self.sync_parent();
    }

    /// Replace the decorative class list.
    pub fn set_classes(&self, classes: Vec<String>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.classes = classes;
        }
        self.sync_parent();
    }

    /// Set or clear the selection flag.
    ///
    /// Succeeds on disabled options too: programmatic selection is not
    /// vetoed, only interactive clicks are.
    pub fn set_selected(&self, selected: bool) {
        let mut changed = false;
        if let Ok(mut guard) = self.core.inner.write()
            && guard.selected != selected
        {
            guard.selected = selected;
            changed = true;
        }
        if !changed || self.is_button_content() {
            return;
        }
        let Some(parent) = self.parent() else { return };
        if selected {
            parent.adopt_internal(self);
        } else {
            parent.check_selected();
        }
    }

    /// Set or clear the disabled flag.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.disabled = disabled;
        }
    }

    /// Set or clear the placeholder flag.
    pub fn set_placeholder(&self, placeholder: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.placeholder = placeholder;
        }
    }

    /// Set or clear the user-owned hidden flag.
    pub fn set_hidden(&self, hidden: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.hidden = hidden;
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Click this option.
    ///
    /// No-op if disabled, if this is a display mirror, or if detached;
    /// otherwise the parent adopts it as a user-driven selection (change
    /// event if the selection actually changed, then deferred close and
    /// focus restore).
    pub fn click(&self) -> EventResult {
        if self.is_disabled() || self.is_button_content() {
            return EventResult::Ignored;
        }
        match self.parent() {
            Some(parent) => parent.select_from_click(self),
            None => EventResult::Ignored,
        }
    }

    /// Hover this option: highlight only, no selection.
    pub fn hover(&self) -> EventResult {
        if self.is_button_content() {
            return EventResult::Ignored;
        }
        match self.parent() {
            Some(parent) => parent.preselect_from_hover(self),
            None => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Parent plumbing
    // -------------------------------------------------------------------------

    /// Locate the owning dropdown, if still attached.
    pub fn parent(&self) -> Option<Dropdown> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.parent.upgrade())
            .map(Dropdown::from_core)
    }

    pub(crate) fn set_parent(&self, parent: Weak<DropdownCore>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.parent = parent;
        }
    }

    pub(crate) fn clear_parent(&self) {
        self.set_parent(Weak::new());
    }

    /// Ask the parent to re-mirror after a content mutation: a flagged
    /// option is re-adopted, a display-adopted placeholder only refreshes
    /// the button surface.
    fn sync_parent(&self) {
        if self.is_button_content() {
            return;
        }
        let Some(parent) = self.parent() else { return };
        if self.is_selected() {
            parent.adopt_internal(self);
        } else if parent.is_current_selection(self) {
            parent.refresh_button();
        }
    }

    // -------------------------------------------------------------------------
    // Dropdown-owned flag writes (no change hook)
    // -------------------------------------------------------------------------

    pub(crate) fn set_selected_silent(&self, selected: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.selected = selected;
        }
    }

    pub(crate) fn set_preselected_silent(&self, preselected: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.preselected = preselected;
        }
    }

    pub(crate) fn set_hidden_internal_silent(&self, hidden: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.hidden_internal = hidden;
        }
    }

    /// Rewrite the display mirror's rendered content and classes.
    pub(crate) fn set_mirror(&self, content: String, classes: Option<Vec<String>>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.text = content;
            if let Some(classes) = classes {
                guard.classes = classes;
            }
        }
    }

    /// Keyboard/mouse navigation eligibility: one uniform predicate for the
    /// whole crate - not disabled, not hidden (either flag), not a display
    /// mirror.
    pub(crate) fn is_navigable(&self) -> bool {
        self.core
            .inner
            .read()
            .map(|guard| {
                !guard.disabled && !guard.hidden && !guard.hidden_internal && !guard.button_content
            })
            .unwrap_or(false)
    }
}

impl Clone for DropdownOption {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl PartialEq for DropdownOption {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl Eq for DropdownOption {}
