//! Button surface updates.
//!
//! The core does not paint anything. It writes text, classes and a minimum
//! width into an opaque [`ButtonSurface`] the host renders however it likes,
//! and mirrors the same content into the reserved display option.

use unicode_width::UnicodeWidthStr;

use super::state::Dropdown;

/// Where the selected option is shown while the list is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowSelectedOn {
    /// Button and list both show the selection.
    #[default]
    Both,
    /// Only the button; the selected option is hidden from the open list.
    Button,
    /// Only the list; the button falls back to the placeholder content.
    List,
}

impl ShowSelectedOn {
    /// Parse an attribute string. Unknown values behave like `Both`.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "button" => Self::Button,
            "list" => Self::List,
            _ => Self::Both,
        }
    }

    /// The attribute string for this mode.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Button => "button",
            Self::List => "list",
        }
    }
}

/// The always-visible render surface of a dropdown's button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonSurface {
    /// Text currently shown on the button.
    pub content: String,
    /// Decorative classes carried over from the mirrored option.
    pub classes: Vec<String>,
    /// Minimum width in cells, maintained while an arrow is attached.
    pub min_width: Option<u16>,
    /// Whether the option list is open.
    pub open: bool,
}

impl Dropdown {
    /// Rewrite the button surface from the current selection state.
    ///
    /// Restores any list-hidden option first, then applies the
    /// `show_selected_on` mode for the open list, and finally mirrors the
    /// selected option's label (override) or content plus its decorative
    /// classes onto the surface and the display option.
    pub(crate) fn update_button(&self) {
        let children = self.options();

        // restore previously hidden options
        for option in &children {
            option.set_hidden_internal_silent(false);
        }

        let (open, mode) = self.open_state();

        // when opened, show the selected option only in the list (button
        // falls back to the placeholder content)
        if open && mode == ShowSelectedOn::List {
            let content = children
                .iter()
                .find(|option| option.is_placeholder())
                .map(|placeholder| placeholder.label().unwrap_or_else(|| placeholder.text()))
                .unwrap_or_default();
            self.write_button(content, None);
            return;
        }

        let selected = self.selected_option();

        // when opened, show the selected option only in the button
        if open
            && mode == ShowSelectedOn::Button
            && let Some(option) = &selected
        {
            option.set_hidden_internal_silent(true);
        }

        let content = selected
            .as_ref()
            .map(|option| option.label().unwrap_or_else(|| option.text()))
            .unwrap_or_default();
        let classes = selected
            .as_ref()
            .map(|option| option.classes())
            .unwrap_or_default();
        self.write_button(content, Some(classes));
    }

    /// Recompute the button minimum width from the widest option content.
    ///
    /// Only maintained while an arrow is attached; without one the width is
    /// left to the host.
    pub(crate) fn update_button_width(&self) {
        if !self.has_arrow() {
            self.write_button_min_width(None);
            return;
        }
        let max_width = self
            .options()
            .iter()
            .map(|option| option.text().width())
            .max()
            .unwrap_or(0);
        self.write_button_min_width(Some(max_width as u16));
    }
}
