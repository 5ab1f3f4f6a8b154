//! Error types for caller contract violations.

use thiserror::Error;

use crate::dropdown::{DropdownId, OptionId};

/// Errors returned by dropdown operations.
///
/// Invalid external input (a value matching no option) is a silent no-op and
/// never reaches this type; only caller contract violations fail loudly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// Programmatic selection of an option that is not a direct child of the
    /// invoking dropdown.
    #[error("option {option} is not a child of dropdown {dropdown}")]
    NotAChild {
        /// The dropdown the call was made on.
        dropdown: DropdownId,
        /// The option that is not one of its children.
        option: OptionId,
    },
}
