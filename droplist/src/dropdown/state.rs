//! Dropdown container state and the selection reconciliation algorithm.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use log::{debug, trace};

use crate::defer::{DeferQueue, DeferredAction};
use crate::error::DropdownError;
use crate::event::{DropdownEvent, DropdownEventKind, EventResult};
use crate::focus::{FocusHandle, FocusId};

use super::arrow::Arrow;
use super::option::{DropdownOption, OptionCore};
use super::render::{ButtonSurface, ShowSelectedOn};

/// Unique identifier for a dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// Internal state for a dropdown.
#[derive(Debug)]
pub(crate) struct DropdownInner {
    /// Direct option children in document order.
    children: Vec<DropdownOption>,
    /// The reserved display mirror. Never part of `children`.
    button_content: DropdownOption,
    /// Decorative arrow, if attached.
    arrow: Option<Arrow>,
    /// Current selection. Lookup-only, never owned.
    selected: Weak<OptionCore>,
    /// Keyboard/mouse highlight. Independent of the selection.
    preselected: Weak<OptionCore>,
    /// Whether the option list is open.
    open: bool,
    /// Disables open/selection via click.
    disabled: bool,
    /// Where the selection is shown while the list is open.
    show_selected_on: ShowSelectedOn,
    /// The opaque render surface the core writes into.
    button: ButtonSurface,
    /// Enclosing dropdown when nested. Dead when top-level.
    parent: Weak<DropdownCore>,
    /// Nested child dropdowns (containment/focus only).
    nested: Vec<Weak<DropdownCore>>,
}

/// Shared core behind the clonable dropdown handle.
#[derive(Debug)]
pub(crate) struct DropdownCore {
    pub(crate) id: DropdownId,
    pub(crate) inner: RwLock<DropdownInner>,
    pub(crate) dirty: AtomicBool,
    pub(crate) events: RwLock<Vec<DropdownEvent>>,
    pub(crate) defer: DeferQueue,
    pub(crate) focus: RwLock<FocusHandle>,
}

/// A dropdown select container with self-managed selection state.
///
/// `Dropdown` owns the aggregate selection state, the open/closed
/// interaction state and the button surface. Options report their local
/// mutations into the reconciliation entry points ([`Dropdown::check_selected`]
/// and the internal adopt path), and the child-list operations reconcile
/// each batch of added/removed options, so at most one child ever carries
/// the `selected` flag and the button never drifts from the selection.
#[derive(Debug)]
pub struct Dropdown {
    core: Arc<DropdownCore>,
}

impl Dropdown {
    /// Create a new dropdown: closed, nothing selected, display mirror built.
    pub fn new() -> Self {
        let core = Arc::new_cyclic(|weak: &Weak<DropdownCore>| DropdownCore {
            id: DropdownId::new(),
            inner: RwLock::new(DropdownInner {
                children: Vec::new(),
                button_content: DropdownOption::new_button_content(weak.clone()),
                arrow: None,
                selected: Weak::new(),
                preselected: Weak::new(),
                open: false,
                disabled: false,
                show_selected_on: ShowSelectedOn::default(),
                button: ButtonSurface::default(),
                parent: Weak::new(),
                nested: Vec::new(),
            }),
            dirty: AtomicBool::new(false),
            events: RwLock::new(Vec::new()),
            defer: DeferQueue::default(),
            focus: RwLock::new(FocusHandle::new()),
        });
        let dropdown = Self { core };
        dropdown.check_selected();
        dropdown
    }

    /// Create a dropdown with initial options.
    pub fn with_options(options: Vec<DropdownOption>) -> Self {
        let dropdown = Self::new();
        dropdown.set_options(options);
        dropdown
    }

    pub(crate) fn from_core(core: Arc<DropdownCore>) -> Self {
        Self { core }
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> DropdownId {
        self.core.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.core.id.to_string()
    }

    /// The focus ID of the always-visible button.
    pub fn focus_id(&self) -> FocusId {
        FocusId::new(self.id_string())
    }

    // -------------------------------------------------------------------------
    // Children
    // -------------------------------------------------------------------------

    /// Snapshot of the direct option children, in document order.
    ///
    /// The display mirror is not a child and never appears here.
    pub fn options(&self) -> Vec<DropdownOption> {
        self.core
            .inner
            .read()
            .map(|guard| guard.children.clone())
            .unwrap_or_default()
    }

    /// Get the number of option children.
    pub fn len(&self) -> usize {
        self.core
            .inner
            .read()
            .map(|guard| guard.children.len())
            .unwrap_or(0)
    }

    /// Check if there are no option children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an option by index.
    pub fn get(&self, index: usize) -> Option<DropdownOption> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.children.get(index).cloned())
    }

    /// The reserved display mirror owned by this dropdown.
    pub fn display_option(&self) -> DropdownOption {
        self.core
            .inner
            .read()
            .map(|guard| guard.button_content.clone())
            .unwrap_or_else(|_| DropdownOption::new_button_content(Weak::new()))
    }

    /// Append an option. One structural batch.
    pub fn push(&self, option: DropdownOption) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.children.push(option.clone());
        }
        self.reconcile_children(&[option], &[]);
    }

    /// Insert an option at an index (clamped to the child count).
    pub fn insert(&self, index: usize, option: DropdownOption) {
        if let Ok(mut guard) = self.core.inner.write() {
            let index = index.min(guard.children.len());
            guard.children.insert(index, option.clone());
        }
        self.reconcile_children(&[option], &[]);
    }

    /// Remove an option. Returns whether it was found.
    ///
    /// Removing the display mirror regenerates it immediately.
    pub fn remove(&self, option: &DropdownOption) -> bool {
        if option.is_button_content() {
            let ours = self
                .core
                .inner
                .read()
                .map(|guard| Arc::ptr_eq(&guard.button_content.core, &option.core))
                .unwrap_or(false);
            if ours {
                self.regenerate_button_content();
            }
            return ours;
        }
        let found = if let Ok(mut guard) = self.core.inner.write() {
            let position = guard
                .children
                .iter()
                .position(|child| Arc::ptr_eq(&child.core, &option.core));
            match position {
                Some(index) => {
                    guard.children.remove(index);
                    true
                }
                None => false,
            }
        } else {
            false
        };
        if found {
            self.reconcile_children(&[], &[option.clone()]);
        }
        found
    }

    /// Remove the option at an index and return it.
    pub fn remove_at(&self, index: usize) -> Option<DropdownOption> {
        let removed = if let Ok(mut guard) = self.core.inner.write() {
            if index < guard.children.len() {
                Some(guard.children.remove(index))
            } else {
                None
            }
        } else {
            None
        };
        if let Some(option) = &removed {
            self.reconcile_children(&[], &[option.clone()]);
        }
        removed
    }

    /// Replace all option children. One structural batch; options present
    /// both before and after are left attached.
    pub fn set_options(&self, options: Vec<DropdownOption>) {
        let previous = if let Ok(mut guard) = self.core.inner.write() {
            std::mem::replace(&mut guard.children, options.clone())
        } else {
            return;
        };
        let added: Vec<DropdownOption> = options
            .iter()
            .filter(|option| !previous.iter().any(|old| old == *option))
            .cloned()
            .collect();
        let removed: Vec<DropdownOption> = previous
            .into_iter()
            .filter(|old| !options.iter().any(|option| option == old))
            .collect();
        self.reconcile_children(&added, &removed);
    }

    /// Remove all option children.
    pub fn clear(&self) {
        self.set_options(Vec::new());
    }

    /// Reconcile one batch of added/removed children: added options carrying
    /// `selected` are adopted before removed-option effects run.
    fn reconcile_children(&self, added: &[DropdownOption], removed: &[DropdownOption]) {
        trace!(
            "{}: reconciling children (+{} -{})",
            self.core.id,
            added.len(),
            removed.len()
        );
        for option in added {
            option.set_parent(Arc::downgrade(&self.core));
            if option.is_selected() {
                self.set_option(option, true);
            } else if option.is_placeholder() {
                self.check_selected();
            }
        }
        for option in removed {
            option.clear_parent();
            if let Ok(mut guard) = self.core.inner.write()
                && guard
                    .preselected
                    .upgrade()
                    .is_some_and(|core| Arc::ptr_eq(&core, &option.core))
            {
                guard.preselected = Weak::new();
            }
            if option.is_selected() || self.is_current_selection(option) {
                self.check_selected();
            }
        }
        self.update_button_width();
        self.mark_dirty();
    }

    /// Build a fresh display mirror after the old one was removed.
    fn regenerate_button_content(&self) {
        debug!("{}: regenerating display option", self.core.id);
        let fresh = DropdownOption::new_button_content(Arc::downgrade(&self.core));
        if let Ok(mut guard) = self.core.inner.write() {
            guard.button_content = fresh;
        }
        self.update_button();
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    /// The selection's resolved value, or an empty string when no child
    /// carries the `selected` flag (a display-adopted placeholder resolves
    /// to empty).
    pub fn value(&self) -> String {
        let Some(selected) = self.selected_option() else {
            return String::new();
        };
        if !selected.is_selected() {
            return String::new();
        }
        selected.value().unwrap_or_default()
    }

    /// Adopt the first child whose resolved value equals `value`.
    ///
    /// Internal adoption: no focus/close side effects, a change event only
    /// if the selection identity actually changed. No match is a silent
    /// no-op and the current selection is unchanged.
    pub fn set_value(&self, value: &str) {
        for option in self.options() {
            if option.value().as_deref() == Some(value) {
                self.set_option(&option, true);
                return;
            }
        }
        trace!("{}: no option matches value {:?}", self.core.id, value);
    }

    /// The option currently adopted for display (flagged selection or
    /// display-adopted placeholder).
    pub fn selected_option(&self) -> Option<DropdownOption> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.selected.upgrade())
            .map(|core| DropdownOption { core })
    }

    /// The option currently highlighted for keyboard/mouse interaction.
    pub fn preselected_option(&self) -> Option<DropdownOption> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.preselected.upgrade())
            .map(|core| DropdownOption { core })
    }

    /// Programmatically select a direct child.
    ///
    /// Fails loudly when `option` is not a child of this dropdown; the
    /// selection state is untouched in that case.
    pub fn select(&self, option: &DropdownOption) -> Result<(), DropdownError> {
        let is_child = self
            .options()
            .iter()
            .any(|child| Arc::ptr_eq(&child.core, &option.core));
        if !is_child {
            return Err(DropdownError::NotAChild {
                dropdown: self.core.id,
                option: option.id(),
            });
        }
        self.set_option(option, true);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reconciliation entry points
    // -------------------------------------------------------------------------

    /// Re-resolve the selection after a `selected` flag disappeared.
    ///
    /// Some child still flagged: no-op. Else a placeholder child is adopted
    /// for display only (no flag, no event). Else the selection clears and
    /// the button renders empty.
    pub fn check_selected(&self) {
        let children = self.options();
        if children.iter().any(|child| child.is_selected()) {
            return;
        }
        let placeholder = children.iter().find(|child| child.is_placeholder());
        if let Ok(mut guard) = self.core.inner.write() {
            guard.selected = match placeholder {
                Some(option) => {
                    debug!("{}: falling back to placeholder {}", self.core.id, option.id());
                    Arc::downgrade(&option.core)
                }
                None => Weak::new(),
            };
        }
        self.update_button();
        self.mark_dirty();
    }

    /// Core reconciliation: adopt `option` as the selection.
    ///
    /// `internal` selects without the user-driven side effects (deferred
    /// close and focus restore). A change event is pushed exactly when the
    /// selection identity actually changed, so internal re-mirrors of the
    /// same option never re-emit.
    pub(crate) fn set_option(&self, option: &DropdownOption, internal: bool) {
        debug!(
            "{}: adopting {} (internal: {})",
            self.core.id,
            option.id(),
            internal
        );

        // strip the selected flag from every sibling
        for child in self.options() {
            if !Arc::ptr_eq(&child.core, &option.core) {
                child.set_selected_silent(false);
            }
        }

        let previous = if let Ok(mut guard) = self.core.inner.write() {
            let previous = guard.selected.upgrade();
            guard.selected = Arc::downgrade(&option.core);
            previous
        } else {
            None
        };

        self.update_button();
        self.clean_preselected();

        // flag the option if it is not already the flagged selection
        if !option.is_selected() {
            option.set_preselected_silent(true);
            option.set_selected_silent(true);
        }

        let changed = previous.is_none_or(|core| !Arc::ptr_eq(&core, &option.core));
        if changed {
            self.push_event(DropdownEvent::new(
                DropdownEventKind::Change,
                self.id_string(),
            ));
        }

        if !internal {
            self.core.defer.push(DeferredAction::CloseList);
            self.core.defer.push(DeferredAction::RestoreFocus);
        }
        self.mark_dirty();
    }

    /// Re-adopt after an attribute/content mutation (no focus/close).
    pub(crate) fn adopt_internal(&self, option: &DropdownOption) {
        self.set_option(option, true);
    }

    /// Whether `option` is the currently adopted selection.
    pub(crate) fn is_current_selection(&self, option: &DropdownOption) -> bool {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.selected.upgrade())
            .is_some_and(|core| Arc::ptr_eq(&core, &option.core))
    }

    // -------------------------------------------------------------------------
    // Highlight
    // -------------------------------------------------------------------------

    /// Highlight an option. Clears any existing highlight first; disabled
    /// options clear the highlight without taking it.
    pub(crate) fn preselect(&self, option: &DropdownOption) {
        self.clean_preselected();
        if option.is_disabled() {
            return;
        }
        option.set_preselected_silent(true);
        if let Ok(mut guard) = self.core.inner.write() {
            guard.preselected = Arc::downgrade(&option.core);
        }
        self.mark_dirty();
    }

    /// Drop the highlight flag from every child.
    pub(crate) fn clean_preselected(&self) {
        for child in self.options() {
            child.set_preselected_silent(false);
        }
        if let Ok(mut guard) = self.core.inner.write() {
            guard.preselected = Weak::new();
        }
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// Check if the option list is open.
    pub fn is_open(&self) -> bool {
        self.core
            .inner
            .read()
            .map(|guard| guard.open)
            .unwrap_or(false)
    }

    /// Open the option list. A disabled dropdown cannot open.
    pub fn open(&self) {
        if self.is_disabled() || self.is_open() {
            return;
        }
        if let Ok(mut guard) = self.core.inner.write() {
            guard.open = true;
        }
        self.update_button();
        self.mark_dirty();
    }

    /// Close the option list.
    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        if let Ok(mut guard) = self.core.inner.write() {
            guard.open = false;
        }
        self.update_button();
        self.mark_dirty();
    }

    /// Toggle the option list.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Check whether click interaction is disabled.
    pub fn is_disabled(&self) -> bool {
        self.core
            .inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Enable or disable click interaction.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.disabled = disabled;
        }
        self.mark_dirty();
    }

    /// Get the display mode for the open list.
    pub fn show_selected_on(&self) -> ShowSelectedOn {
        self.core
            .inner
            .read()
            .map(|guard| guard.show_selected_on)
            .unwrap_or_default()
    }

    /// Set the display mode and refresh the button surface.
    pub fn set_show_selected_on(&self, mode: ShowSelectedOn) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.show_selected_on = mode;
        }
        self.update_button();
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Arrow
    // -------------------------------------------------------------------------

    /// Attach a decorative arrow; starts min-width maintenance.
    pub fn attach_arrow(&self, arrow: Arrow) {
        arrow.set_parent(Arc::downgrade(&self.core));
        if let Ok(mut guard) = self.core.inner.write() {
            guard.arrow = Some(arrow);
        }
        self.update_button_width();
        self.mark_dirty();
    }

    /// Detach the arrow, if any; the min width is released.
    pub fn remove_arrow(&self) -> Option<Arrow> {
        let arrow = if let Ok(mut guard) = self.core.inner.write() {
            guard.arrow.take()
        } else {
            None
        };
        if let Some(arrow) = &arrow {
            arrow.set_parent(Weak::new());
        }
        self.update_button_width();
        self.mark_dirty();
        arrow
    }

    /// The attached arrow, if any.
    pub fn arrow(&self) -> Option<Arrow> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.arrow.clone())
    }

    pub(crate) fn has_arrow(&self) -> bool {
        self.core
            .inner
            .read()
            .map(|guard| guard.arrow.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Nesting & focus
    // -------------------------------------------------------------------------

    /// Nest a child dropdown under this one.
    ///
    /// The child shares this dropdown's focus handle and its blur
    /// notifications climb through this dropdown.
    pub fn attach_nested(&self, child: &Dropdown) {
        if let Ok(mut guard) = child.core.inner.write() {
            guard.parent = Arc::downgrade(&self.core);
        }
        if let Ok(mut guard) = self.core.inner.write() {
            guard.nested.push(Arc::downgrade(&child.core));
        }
        if let Ok(mut guard) = child.core.focus.write() {
            *guard = self.focus_handle();
        }
    }

    /// The enclosing dropdown when nested.
    pub fn parent_dropdown(&self) -> Option<Dropdown> {
        self.core
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.parent.upgrade())
            .map(Dropdown::from_core)
    }

    /// The focus handle shared by this dropdown tree.
    pub fn focus_handle(&self) -> FocusHandle {
        self.core
            .focus
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Whether a focus target lies inside this dropdown: its button, one of
    /// its options, its display mirror, or anything inside a nested child.
    pub fn contains(&self, target: &FocusId) -> bool {
        if target.0 == self.id_string() {
            return true;
        }
        if self.display_option().id_string() == target.0 {
            return true;
        }
        if self
            .options()
            .iter()
            .any(|option| option.id_string() == target.0)
        {
            return true;
        }
        let nested = self
            .core
            .inner
            .read()
            .map(|guard| guard.nested.clone())
            .unwrap_or_default();
        nested
            .iter()
            .filter_map(Weak::upgrade)
            .any(|core| Dropdown::from_core(core).contains(target))
    }

    /// The button gained focus: highlight the flagged selection.
    pub fn handle_focus(&self) {
        self.focus_handle().set_focus(self.focus_id());
        self.clean_preselected();
        if let Some(selected) = self.options().into_iter().find(|c| c.is_selected()) {
            selected.set_preselected_silent(true);
        }
        self.mark_dirty();
    }

    /// Focus moved away from the button to `target` (None when focus left
    /// the document entirely). Closes unless the target is still inside this
    /// dropdown, then lets enclosing dropdowns re-evaluate themselves.
    pub fn handle_blur(&self, target: Option<&FocusId>) {
        let inside = target.is_some_and(|t| self.contains(t));
        if !inside {
            self.close();
        }
        if let Some(parent) = self.parent_dropdown() {
            parent.child_focus_out(target);
        }
    }

    /// A nested child lost focus. Internal notification: never surfaced on
    /// the public event queue.
    pub(crate) fn child_focus_out(&self, target: Option<&FocusId>) {
        let inside = target.is_some_and(|t| self.contains(t));
        if !inside {
            self.close();
        }
        if let Some(parent) = self.parent_dropdown() {
            parent.child_focus_out(target);
        }
    }

    // -------------------------------------------------------------------------
    // Events & dispatch
    // -------------------------------------------------------------------------

    /// Push an event onto this dropdown's queue and bubble it to ancestors.
    pub(crate) fn push_event(&self, event: DropdownEvent) {
        trace!("{}: event {:?}", self.core.id, event.kind);
        if let Ok(mut guard) = self.core.events.write() {
            guard.push(event.clone());
        }
        if let Some(parent) = self.parent_dropdown() {
            parent.push_event(event);
        }
    }

    /// Drain the pending events.
    pub fn take_events(&self) -> Vec<DropdownEvent> {
        self.core
            .events
            .write()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    /// Run a user-driven entry point; deferred close/focus actions drain
    /// when the outermost dispatch returns.
    pub(crate) fn dispatch<R>(&self, f: impl FnOnce() -> R) -> R {
        self.core.defer.enter();
        let result = f();
        for action in self.core.defer.exit() {
            match action {
                DeferredAction::CloseList => self.close(),
                DeferredAction::RestoreFocus => self.handle_focus(),
            }
        }
        result
    }

    /// User-driven adoption from an option click.
    pub(crate) fn select_from_click(&self, option: &DropdownOption) -> EventResult {
        self.dispatch(|| self.set_option(option, false));
        EventResult::Consumed
    }

    /// Highlight from an option hover.
    pub(crate) fn preselect_from_hover(&self, option: &DropdownOption) -> EventResult {
        self.dispatch(|| self.preselect(option));
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Button surface plumbing
    // -------------------------------------------------------------------------

    /// Snapshot of the button surface.
    pub fn button_surface(&self) -> ButtonSurface {
        self.core
            .inner
            .read()
            .map(|guard| guard.button.clone())
            .unwrap_or_default()
    }

    /// Refresh the surface without touching the selection (display-adopted
    /// placeholder content changed, arrow content changed).
    pub(crate) fn refresh_button(&self) {
        self.update_button();
        self.mark_dirty();
    }

    pub(crate) fn open_state(&self) -> (bool, ShowSelectedOn) {
        self.core
            .inner
            .read()
            .map(|guard| (guard.open, guard.show_selected_on))
            .unwrap_or((false, ShowSelectedOn::default()))
    }

    pub(crate) fn write_button(&self, content: String, classes: Option<Vec<String>>) {
        let display = self.display_option();
        display.set_mirror(content.clone(), classes.clone());
        if let Ok(mut guard) = self.core.inner.write() {
            guard.button.content = content;
            guard.button.open = guard.open;
            if let Some(classes) = classes {
                guard.button.classes = classes;
            }
        }
    }

    pub(crate) fn write_button_min_width(&self, min_width: Option<u16>) {
        if let Ok(mut guard) = self.core.inner.write() {
            guard.button.min_width = min_width;
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.core.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.core.dirty.store(false, Ordering::SeqCst);
    }

    pub(crate) fn mark_dirty(&self) {
        self.core.dirty.store(true, Ordering::SeqCst);
    }
}

impl Clone for Dropdown {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}
