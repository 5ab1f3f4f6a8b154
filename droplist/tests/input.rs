use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use droplist::{Key, KeyCombo, Modifiers, convert_key_event};

#[test]
fn test_convert_plain_keys() {
    let combo = convert_key_event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)).unwrap();
    assert_eq!(combo, KeyCombo::key(Key::Up));

    let combo = convert_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).unwrap();
    assert_eq!(combo.key, Key::Enter);
}

#[test]
fn test_convert_modifiers() {
    let combo =
        convert_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)).unwrap();
    assert_eq!(combo, KeyCombo::key(Key::Char('a')).ctrl());
    assert!(combo.modifiers.any());
    assert!(!Modifiers::NONE.any());
}

#[test]
fn test_space_is_normalized() {
    let combo = convert_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)).unwrap();
    assert_eq!(combo.key, Key::Space);
}

#[test]
fn test_release_events_are_dropped() {
    let event = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    assert!(convert_key_event(event).is_none());
}

#[test]
fn test_unmapped_codes_are_dropped() {
    assert!(convert_key_event(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)).is_none());
    assert!(convert_key_event(KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE)).is_none());
}
