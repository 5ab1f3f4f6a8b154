use droplist::{Arrow, ArrowPosition, Dropdown, DropdownOption};

fn animals() -> Dropdown {
    Dropdown::with_options(vec![
        DropdownOption::new("Dog"),
        DropdownOption::new("Gentoo Penguin"),
    ])
}

// ============================================================================
// Button surface
// ============================================================================

#[test]
fn test_surface_tracks_open_state() {
    let dropdown = animals();
    assert!(!dropdown.button_surface().open);

    dropdown.click_button();
    assert!(dropdown.button_surface().open);

    dropdown.click_button();
    assert!(!dropdown.button_surface().open);
}

#[test]
fn test_surface_mirrors_label_over_content() {
    let dropdown = animals();
    let penguin = dropdown.get(1).unwrap();
    penguin.set_label("The Penguin");
    penguin.set_selected(true);

    let surface = dropdown.button_surface();
    assert_eq!(surface.content, "The Penguin");
}

#[test]
fn test_dirty_flag_tracks_mutations() {
    let dropdown = animals();
    dropdown.clear_dirty();
    assert!(!dropdown.is_dirty());

    dropdown.set_value("Dog");
    assert!(dropdown.is_dirty());

    dropdown.clear_dirty();
    dropdown.click_button();
    assert!(dropdown.is_dirty());
}

// ============================================================================
// Arrow
// ============================================================================

#[test]
fn test_arrow_defaults_to_right() {
    assert_eq!(Arrow::new().position(), ArrowPosition::Right);
    assert_eq!(
        Arrow::with_position(ArrowPosition::Left).position(),
        ArrowPosition::Left
    );
}

#[test]
fn test_without_arrow_no_min_width_is_maintained() {
    let dropdown = animals();
    assert_eq!(dropdown.button_surface().min_width, None);
}

#[test]
fn test_arrow_maintains_min_width_from_widest_option() {
    let dropdown = animals();
    dropdown.attach_arrow(Arrow::new());

    // "Gentoo Penguin" is 14 cells wide
    assert_eq!(dropdown.button_surface().min_width, Some(14));
}

#[test]
fn test_min_width_follows_structural_changes() {
    let dropdown = animals();
    dropdown.attach_arrow(Arrow::new());

    dropdown.push(DropdownOption::new("A considerably longer entry"));
    assert_eq!(dropdown.button_surface().min_width, Some(27));

    let longest = dropdown.get(2).unwrap();
    dropdown.remove(&longest);
    assert_eq!(dropdown.button_surface().min_width, Some(14));
}

#[test]
fn test_min_width_counts_display_cells() {
    let dropdown = Dropdown::with_options(vec![DropdownOption::new("ねこ")]);
    dropdown.attach_arrow(Arrow::new());

    // two full-width characters
    assert_eq!(dropdown.button_surface().min_width, Some(4));
}

#[test]
fn test_removing_the_arrow_releases_the_min_width() {
    let dropdown = animals();
    let arrow = Arrow::new();
    dropdown.attach_arrow(arrow);

    let detached = dropdown.remove_arrow().unwrap();
    assert_eq!(dropdown.button_surface().min_width, None);
    assert!(detached.parent().is_none());
    assert!(dropdown.arrow().is_none());
}

#[test]
fn test_arrow_glyph_change_requests_a_refresh() {
    let dropdown = animals();
    let arrow = Arrow::new();
    dropdown.attach_arrow(arrow.clone());
    dropdown.clear_dirty();

    arrow.set_glyph("▼");
    assert_eq!(arrow.glyph(), "▼");
    assert!(dropdown.is_dirty());
}
