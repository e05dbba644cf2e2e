//! Deferred image loading for `img[data-src]`.
//!
//! Each image gets its real `src` the first time it intersects the viewport,
//! after which it is unobserved. Off unless `SiteConfig::lazy_images` is set.
//! Browsers without `IntersectionObserver` keep the placeholders.

pub const LAZY_SELECTOR: &str = "img[data-src]";

/// Observe every `img[data-src]` currently in the document.
pub fn install_lazy_images() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let has_observer = js_sys::Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false);
        if !has_observer {
            log::debug!("IntersectionObserver unavailable; lazy images stay as placeholders");
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        let Ok(images) = document.query_selector_all(LAZY_SELECTOR) else {
            return;
        };

        let cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(src) = target.get_attribute("data-src") {
                        let _ = target.set_attribute("src", &src);
                        let _ = target.remove_attribute("data-src");
                    }
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let Ok(observer) = web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()) else {
            return;
        };
        cb.forget();

        for idx in 0..images.length() {
            if let Some(el) = images.item(idx).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }
    }
}
