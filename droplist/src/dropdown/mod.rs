//! Dropdown select component.
//!
//! Three cooperating entities composed through explicit reconciliation
//! calls instead of observation:
//! - `state.rs` - container state and the reconciliation algorithm
//! - `option.rs` - selectable option items
//! - `arrow.rs` - decorative arrow indicator
//! - `events.rs` - keyboard/mouse dispatch
//! - `render.rs` - button surface updates

mod arrow;
mod events;
mod option;
mod render;
mod state;

pub use arrow::{Arrow, ArrowPosition};
pub use option::{DropdownOption, OptionId};
pub use render::{ButtonSurface, ShowSelectedOn};
pub use state::{Dropdown, DropdownId};
