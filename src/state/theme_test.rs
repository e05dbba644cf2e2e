use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Debug, Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[test]
fn no_preference_follows_system_dark() {
    let theme = ThemeController::load(MemoryStore::default(), true);
    assert_eq!(theme.current(), Theme::Dark);
    assert!(!theme.has_stored_preference());
}

#[test]
fn no_preference_follows_system_light() {
    let theme = ThemeController::load(MemoryStore::default(), false);
    assert_eq!(theme.current(), Theme::Slate);
}

#[test]
fn stored_preference_wins_over_system() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "theme-slate");
    let theme = ThemeController::load(store, true);
    assert_eq!(theme.current(), Theme::Slate);
}

#[test]
fn unrecognized_stored_value_falls_back_to_system() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "neon");
    let theme = ThemeController::load(store, true);
    assert_eq!(theme.current(), Theme::Dark);
    assert!(!theme.has_stored_preference());
}

#[test]
fn toggle_persists_and_pins_theme() {
    let mut theme = ThemeController::load(MemoryStore::default(), true);

    assert_eq!(theme.toggle(), Theme::Slate);
    assert_eq!(theme.store.get(STORAGE_KEY).as_deref(), Some("theme-slate"));

    assert_eq!(theme.system_changed(true), None);
    assert_eq!(theme.current(), Theme::Slate);
}

#[test]
fn system_change_applies_without_preference() {
    let mut theme = ThemeController::load(MemoryStore::default(), true);
    assert_eq!(theme.system_changed(false), Some(Theme::Slate));
    assert_eq!(theme.current(), Theme::Slate);
}

#[test]
fn toggle_twice_returns_to_start() {
    let mut theme = ThemeController::load(MemoryStore::default(), false);
    theme.toggle();
    assert_eq!(theme.toggle(), Theme::Slate);
    assert_eq!(theme.store.get(STORAGE_KEY).as_deref(), Some("theme-slate"));
}

#[test]
fn parse_accepts_bare_tags_and_class_names() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("theme-dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("slate"), Some(Theme::Slate));
    assert_eq!(Theme::parse(" theme-slate "), Some(Theme::Slate));
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggle_icon_points_at_other_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
    assert_eq!(Theme::Slate.toggle_icon(), "☾");
}
