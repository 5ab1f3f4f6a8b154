//! droplist - a dropdown/select widget core.
//!
//! The crate implements the selection-state synchronization protocol of a
//! custom select widget: a [`Dropdown`] container, its [`DropdownOption`]
//! children and an optional decorative [`Arrow`], kept consistent across
//! programmatic attribute mutation, dynamic child insertion/removal, mouse
//! and keyboard interaction, and the dropdown's own value property. The
//! visible button surface always mirrors the selection and a change event
//! fires exactly once per actual selection change.
//!
//! Rendering is out of scope: the core writes text, classes and width hints
//! into an opaque [`ButtonSurface`] for the host to draw.

pub mod dropdown;
pub mod error;
pub mod event;
pub mod focus;
pub mod input;

mod defer;

pub use dropdown::{
    Arrow, ArrowPosition, ButtonSurface, Dropdown, DropdownId, DropdownOption, OptionId,
    ShowSelectedOn,
};
pub use error::DropdownError;
pub use event::{DropdownEvent, DropdownEventKind, EventResult};
pub use focus::{FocusHandle, FocusId, FocusState};
pub use input::{Key, KeyCombo, Modifiers, convert_key_event};

pub mod prelude {
    //! Convenience re-exports for hosts embedding the widget.
    pub use crate::dropdown::{
        Arrow, ArrowPosition, ButtonSurface, Dropdown, DropdownOption, ShowSelectedOn,
    };
    pub use crate::error::DropdownError;
    pub use crate::event::{DropdownEvent, DropdownEventKind, EventResult};
    pub use crate::focus::{FocusHandle, FocusId};
    pub use crate::input::{Key, KeyCombo, Modifiers, convert_key_event};
}
