use super::*;

#[test]
fn card_starts_collapsed() {
    let card = CardState::default();
    assert!(!card.expanded);
    assert_eq!(card.button_text(), "Expand");
    assert_eq!(card.aria_label(), "Expand description");
}

#[test]
fn toggle_flips_labels() {
    let mut card = CardState::default();
    assert!(card.toggle());
    assert_eq!(card.button_text(), "Collapse");
    assert_eq!(card.aria_label(), "Collapse description");
    assert!(!card.toggle());
    assert_eq!(card.button_text(), "Expand");
}

#[test]
fn class_with_appends_expanded() {
    let mut card = CardState::default();
    assert_eq!(card.class_with("card-description"), "card-description");
    card.toggle();
    assert_eq!(card.class_with("card-description"), "card-description expanded");
}

#[test]
fn off_screen_only_when_bottom_exceeds_viewport() {
    assert!(is_partially_off_screen(900.5, 900.0));
    assert!(!is_partially_off_screen(900.0, 900.0));
    assert!(!is_partially_off_screen(120.0, 900.0));
}
