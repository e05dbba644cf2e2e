//! Smooth scrolling for same-page `#hash` links.
//!
//! A single delegated click listener on the document handles every
//! `a[href^="#"]`, including links rendered after installation.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Element id a same-page link points at, if it is one worth intercepting.
///
/// Bare `#` and non-hash hrefs are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// The installed click handler; dropping it removes the listener.
#[derive(Default)]
pub struct SmoothAnchors {
    #[cfg(feature = "csr")]
    _listener: Option<super::listener::EventListener>,
}

/// Install the delegated click handler. Call once at startup.
pub fn install_smooth_anchors() -> SmoothAnchors {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        use super::listener::EventListener;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return SmoothAnchors::default();
        };
        let listener = EventListener::new(&document, "click", move |ev| {
            let Some(anchor) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(r##"a[href^="#"]"##).ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            if !super::scroll::smooth_scroll_to_id(id, super::scroll::Block::Start) {
                return;
            }
            ev.prevent_default();
            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href));
            }
        });
        SmoothAnchors { _listener: listener }
    }
    #[cfg(not(feature = "csr"))]
    {
        SmoothAnchors::default()
    }
}
