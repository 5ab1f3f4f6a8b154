//! Event types for dropdown interaction and change notification.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// The kind of dropdown event that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEventKind {
    /// The selection actually changed (user click, keyboard confirm, or API
    /// adoption of a different option). Internal re-mirrors never emit this.
    Change,
}

/// An event pushed onto a dropdown's pending queue.
///
/// Events bubble: a nested dropdown's event is also pushed onto every
/// ancestor dropdown's queue with the original source preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownEvent {
    /// What happened.
    pub kind: DropdownEventKind,
    /// ID string of the dropdown the event originated from.
    pub source: String,
}

impl DropdownEvent {
    /// Create a new event.
    pub fn new(kind: DropdownEventKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}
