use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_dom_unknown_is_primary() {
    assert_eq!(Button::from_dom(4), Button::Primary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

// =============================================================
// Key
// =============================================================

#[test]
fn enter_is_commit() {
    assert!(Key("Enter".into()).is_commit());
}

#[test]
fn other_keys_are_not_commit() {
    assert!(!Key("Escape".into()).is_commit());
    assert!(!Key("enter".into()).is_commit());
    assert!(!Key(String::new()).is_commit());
}

// =============================================================
// Target
// =============================================================

#[test]
fn handle_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Handle::Rotate).unwrap(), "\"rotate\"");
}

#[test]
fn background_has_no_item() {
    assert_eq!(Target::Background.item(), None);
}

#[test]
fn body_and_handle_report_item() {
    let id = ItemId::from(7);
    assert_eq!(Target::Body(id).item(), Some(id));
    assert_eq!(Target::Handle(id, Handle::Delete).item(), Some(id));
}
