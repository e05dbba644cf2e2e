//! Theme glue for the browser.
//!
//! Reads `prefers-color-scheme`, applies the theme class on `<body>`, and
//! subscribes to system preference changes. Requires a browser environment;
//! host builds compile these helpers to no-ops.
//!
//! TRADE-OFFS
//! ==========
//! Only the theme classes are swapped on `<body>`; other body classes such as
//! `loaded` survive a toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the system currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(SYSTEM_DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Put `theme`'s class on `<body>`, removing the other theme's class.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        let _ = class_list.remove_1(theme.toggled().class_name());
        let _ = class_list.add_1(theme.class_name());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Subscription to system color-scheme changes; dropping it unsubscribes.
#[derive(Default)]
pub struct PreferenceWatch {
    #[cfg(feature = "csr")]
    _listener: Option<crate::util::listener::EventListener>,
}

/// Call `on_change` with the new dark/light preference whenever the system
/// color scheme changes, for as long as the returned watch is alive.
pub fn watch_system_preference(on_change: impl Fn(bool) + 'static) -> PreferenceWatch {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::listener::EventListener;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(SYSTEM_DARK_QUERY).ok().flatten()) else {
            return PreferenceWatch::default();
        };
        let listener = EventListener::new(&mq, "change", move |ev| {
            if let Ok(ev) = ev.dyn_into::<web_sys::MediaQueryListEvent>() {
                on_change(ev.matches());
            }
        });
        PreferenceWatch { _listener: listener }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
        PreferenceWatch::default()
    }
}

/// Mark the page as initialized so entrance animations can start.
pub fn mark_loaded() {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1("loaded");
        }
    }
}
