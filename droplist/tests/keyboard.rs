use droplist::{Dropdown, DropdownOption, EventResult, Key, KeyCombo};

/// Placeholder, two plain options around a disabled one.
fn fixture() -> (Dropdown, Vec<DropdownOption>) {
    let placeholder = DropdownOption::new("Pick one");
    placeholder.set_placeholder(true);
    let a = DropdownOption::new("A");
    let b = DropdownOption::new("B");
    b.set_disabled(true);
    let c = DropdownOption::new("C");
    let options = vec![placeholder, a, b, c];
    let dropdown = Dropdown::with_options(options.clone());
    dropdown.take_events();
    (dropdown, options)
}

fn press(dropdown: &Dropdown, key: Key) -> EventResult {
    dropdown.handle_key(&KeyCombo::key(key))
}

fn highlighted(dropdown: &Dropdown) -> Option<String> {
    dropdown.preselected_option().map(|option| option.text())
}

// ============================================================================
// Highlight movement
// ============================================================================

#[test]
fn test_down_bootstraps_to_first_eligible() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::Down);
    assert_eq!(highlighted(&dropdown), Some("Pick one".to_string()));
}

#[test]
fn test_up_also_bootstraps_to_first_eligible() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::Up);
    assert_eq!(highlighted(&dropdown), Some("Pick one".to_string()));
}

#[test]
fn test_down_skips_disabled_options() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::Down);
    press(&dropdown, Key::Down);
    assert_eq!(highlighted(&dropdown), Some("A".to_string()));
    press(&dropdown, Key::Down);
    assert_eq!(highlighted(&dropdown), Some("C".to_string()));
}

#[test]
fn test_down_clamps_at_last_eligible() {
    let (dropdown, _) = fixture();
    for _ in 0..10 {
        press(&dropdown, Key::Down);
    }
    assert_eq!(highlighted(&dropdown), Some("C".to_string()));
}

#[test]
fn test_up_clamps_at_first_eligible() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::Down);
    press(&dropdown, Key::Down);
    press(&dropdown, Key::Up);
    assert_eq!(highlighted(&dropdown), Some("Pick one".to_string()));
    press(&dropdown, Key::Up);
    assert_eq!(highlighted(&dropdown), Some("Pick one".to_string()));
}

#[test]
fn test_navigation_skips_hidden_options() {
    let (dropdown, options) = fixture();
    options[0].set_hidden(true);
    press(&dropdown, Key::Down);
    assert_eq!(highlighted(&dropdown), Some("A".to_string()));
}

#[test]
fn test_home_and_end_jump_to_eligible_edges() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::End);
    assert_eq!(highlighted(&dropdown), Some("C".to_string()));
    press(&dropdown, Key::Home);
    assert_eq!(highlighted(&dropdown), Some("Pick one".to_string()));
}

#[test]
fn test_only_one_highlight_at_a_time() {
    let (dropdown, options) = fixture();
    press(&dropdown, Key::Down);
    press(&dropdown, Key::Down);
    let flagged = options.iter().filter(|o| o.is_preselected()).count();
    assert_eq!(flagged, 1);
}

#[test]
fn test_modified_keys_are_ignored() {
    let (dropdown, _) = fixture();
    assert_eq!(
        dropdown.handle_key(&KeyCombo::key(Key::Down).ctrl()),
        EventResult::Ignored
    );
    assert_eq!(
        dropdown.handle_key(&KeyCombo::key(Key::Down).alt()),
        EventResult::Ignored
    );
    assert_eq!(highlighted(&dropdown), None);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let (dropdown, _) = fixture();
    assert_eq!(press(&dropdown, Key::Char('x')), EventResult::Ignored);
    assert_eq!(press(&dropdown, Key::Tab), EventResult::Ignored);
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_highlights() {
    let (dropdown, options) = fixture();
    options[3].hover();
    assert_eq!(highlighted(&dropdown), Some("C".to_string()));
    assert!(options[3].is_preselected());
}

#[test]
fn test_hover_on_disabled_clears_highlight_without_taking_it() {
    let (dropdown, options) = fixture();
    options[1].hover();
    assert_eq!(highlighted(&dropdown), Some("A".to_string()));

    options[2].hover();
    assert_eq!(highlighted(&dropdown), None);
    assert!(!options[2].is_preselected());
}

// ============================================================================
// Enter / Escape / open-close
// ============================================================================

#[test]
fn test_enter_opens_a_closed_dropdown() {
    let (dropdown, _) = fixture();
    assert!(!dropdown.is_open());
    assert_eq!(press(&dropdown, Key::Enter), EventResult::Consumed);
    assert!(dropdown.is_open());
}

#[test]
fn test_enter_closes_an_open_dropdown_without_highlight() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::Enter);
    press(&dropdown, Key::Enter);
    assert!(!dropdown.is_open());
}

#[test]
fn test_enter_confirms_the_highlighted_option() {
    let (dropdown, _) = fixture();
    press(&dropdown, Key::Enter);
    press(&dropdown, Key::Down);
    press(&dropdown, Key::Down);
    assert_eq!(highlighted(&dropdown), Some("A".to_string()));

    press(&dropdown, Key::Enter);
    assert_eq!(dropdown.value(), "A");
    // deferred side effects ran once the keypress finished
    assert!(!dropdown.is_open());
    assert!(dropdown.focus_handle().is_focused(&dropdown.id_string()));
    assert_eq!(dropdown.take_events().len(), 1);
}

#[test]
fn test_escape_closes() {
    let (dropdown, _) = fixture();
    dropdown.click_button();
    assert!(dropdown.is_open());
    assert_eq!(press(&dropdown, Key::Escape), EventResult::Consumed);
    assert!(!dropdown.is_open());
}

#[test]
fn test_click_button_toggles() {
    let (dropdown, _) = fixture();
    dropdown.click_button();
    assert!(dropdown.is_open());
    dropdown.click_button();
    assert!(!dropdown.is_open());
}

#[test]
fn test_click_option_selects_and_defers_close() {
    let (dropdown, options) = fixture();
    dropdown.click_button();

    assert_eq!(options[3].click(), EventResult::Consumed);
    assert_eq!(dropdown.value(), "C");
    assert!(!dropdown.is_open());
    assert!(dropdown.focus_handle().is_focused(&dropdown.id_string()));
    // focus restoration re-highlights the selection
    assert!(options[3].is_preselected());
    assert_eq!(dropdown.take_events().len(), 1);
}

#[test]
fn test_click_same_option_twice_emits_once() {
    let (dropdown, options) = fixture();
    options[1].click();
    options[1].click();
    assert_eq!(dropdown.take_events().len(), 1);
}

// ============================================================================
// Disabled dropdown
// ============================================================================

#[test]
fn test_disabled_dropdown_cannot_open() {
    let (dropdown, _) = fixture();
    dropdown.set_disabled(true);

    dropdown.open();
    assert!(!dropdown.is_open());
    assert_eq!(press(&dropdown, Key::Enter), EventResult::Ignored);
    assert!(!dropdown.is_open());
}

#[test]
fn test_click_on_disabled_dropdown_force_closes() {
    let (dropdown, _) = fixture();
    dropdown.click_button();
    assert!(dropdown.is_open());

    dropdown.set_disabled(true);
    dropdown.click_button();
    assert!(!dropdown.is_open());
    assert!(dropdown.focus_handle().current().is_none());
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_highlights_the_flagged_selection() {
    let (dropdown, options) = fixture();
    options[3].set_selected(true);
    dropdown.take_events();

    dropdown.handle_focus();
    assert!(options[3].is_preselected());
    assert!(dropdown.focus_handle().is_focused(&dropdown.id_string()));
}

#[test]
fn test_focus_does_not_highlight_a_displayed_placeholder() {
    let (dropdown, options) = fixture();
    dropdown.handle_focus();
    assert!(!options[0].is_preselected());
}

#[test]
fn test_blur_to_outside_closes() {
    let (dropdown, _) = fixture();
    dropdown.click_button();
    assert!(dropdown.is_open());

    dropdown.handle_blur(Some(&"somewhere-else".into()));
    assert!(!dropdown.is_open());
}

#[test]
fn test_blur_to_own_option_stays_open() {
    let (dropdown, options) = fixture();
    dropdown.click_button();

    let target = options[1].id_string().into();
    dropdown.handle_blur(Some(&target));
    assert!(dropdown.is_open());
}

#[test]
fn test_blur_to_nowhere_closes() {
    let (dropdown, _) = fixture();
    dropdown.click_button();
    dropdown.handle_blur(None);
    assert!(!dropdown.is_open());
}
