//! Keyboard and mouse dispatch for the dropdown.

use log::debug;

use crate::event::EventResult;
use crate::input::{Key, KeyCombo};

use super::option::DropdownOption;
use super::state::Dropdown;

impl Dropdown {
    /// Handle a key press on the focused dropdown.
    ///
    /// Arrows move the highlight (clamped at the ends, bootstrapping to the
    /// first eligible option when nothing is highlighted yet), Home/End jump
    /// to the edges, Escape closes, Enter opens a closed list or confirms
    /// the highlighted option of an open one. Combos with ctrl/alt are
    /// ignored.
    pub fn handle_key(&self, key: &KeyCombo) -> EventResult {
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }
        debug!("{}: key {:?}", self.id(), key.key);
        self.dispatch(|| match key.key {
            Key::Up => {
                self.highlight_step(-1);
                EventResult::Consumed
            }
            Key::Down => {
                self.highlight_step(1);
                EventResult::Consumed
            }
            Key::Home => {
                self.highlight_edge(false);
                EventResult::Consumed
            }
            Key::End => {
                self.highlight_edge(true);
                EventResult::Consumed
            }
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            Key::Enter => self.confirm(),
            _ => EventResult::Ignored,
        })
    }

    /// Click the always-visible button: focus it and toggle the list. A
    /// disabled dropdown only drops focus and force-closes.
    pub fn click_button(&self) -> EventResult {
        self.dispatch(|| {
            self.handle_focus();
            if self.is_disabled() {
                self.focus_handle().clear_focus();
                self.close();
                return;
            }
            self.toggle();
        });
        EventResult::Consumed
    }

    /// Enter: open when closed or nothing is highlighted, otherwise confirm
    /// the highlighted option as if it were clicked.
    fn confirm(&self) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        let preselected = self.preselected_option();
        if !self.is_open() || preselected.is_none() {
            return self.click_button();
        }
        match preselected {
            Some(option) => option.click(),
            None => EventResult::Consumed,
        }
    }

    /// Move the highlight one eligible sibling in `step` direction,
    /// clamping at the ends of the list.
    fn highlight_step(&self, step: isize) {
        let children = self.options();
        let current = self
            .preselected_option()
            .filter(DropdownOption::is_navigable)
            .and_then(|current| children.iter().position(|child| *child == current));

        let target = match current {
            // nothing highlighted yet: both directions bootstrap to the
            // first eligible option
            None => children.iter().position(DropdownOption::is_navigable),
            Some(position) => next_navigable(&children, position, step),
        };

        if let Some(index) = target
            && current != Some(index)
        {
            self.preselect(&children[index]);
        }
    }

    /// Jump the highlight to the first or last eligible option.
    fn highlight_edge(&self, last: bool) {
        let children = self.options();
        let target = if last {
            children.iter().rposition(DropdownOption::is_navigable)
        } else {
            children.iter().position(DropdownOption::is_navigable)
        };
        if let Some(index) = target {
            self.preselect(&children[index]);
        }
    }
}

/// Scan from `position` in `step` direction for the next eligible option.
fn next_navigable(children: &[DropdownOption], position: usize, step: isize) -> Option<usize> {
    let mut index = position as isize + step;
    while index >= 0 && (index as usize) < children.len() {
        if children[index as usize].is_navigable() {
            return Some(index as usize);
        }
        index += step;
    }
    // clamped: stay where we are
    Some(position)
}
