#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn system_prefers_dark_is_false_outside_browser() {
    assert!(!system_prefers_dark());
}

#[test]
fn browser_helpers_are_callable_noops() {
    apply(Theme::Dark);
    apply(Theme::Slate);
    drop(watch_system_preference(|_| {}));
    mark_loaded();
}
