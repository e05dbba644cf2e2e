use super::*;

#[test]
fn hash_link_yields_target_id() {
    assert_eq!(anchor_target("#projects"), Some("projects"));
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn other_links_are_ignored() {
    assert_eq!(anchor_target("/about"), None);
    assert_eq!(anchor_target("https://example.com/#top"), None);
    assert_eq!(anchor_target(""), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn install_outside_browser_is_a_noop() {
    drop(install_smooth_anchors());
}
