//! Window scroll helpers: smooth scrolling, viewport metrics, frame callbacks.
//!
//! Requires a browser environment; without `csr` metrics read as zero and
//! frame callbacks run immediately.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

/// Vertical alignment for `scrollIntoView`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Start,
    Nearest,
}

/// Smoothly scroll `el` into view.
#[cfg(feature = "csr")]
pub fn smooth_scroll_into_view(el: &web_sys::Element, block: Block) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(match block {
        Block::Start => web_sys::ScrollLogicalPosition::Start,
        Block::Nearest => web_sys::ScrollLogicalPosition::Nearest,
    });
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scroll the element with `id` into view. Returns `false` when no
/// such element exists.
pub fn smooth_scroll_to_id(id: &str, block: Block) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        smooth_scroll_into_view(&el, block);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, block);
        false
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Inner height of the window in CSS pixels.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Absolute document offsets of the elements with the given ids, skipping
/// ids that are not on the page. Yields `(index, top)` pairs.
pub fn section_tops(ids: &[String]) -> Vec<(usize, f64)> {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let offset = scroll_y();
        ids.iter()
            .enumerate()
            .filter_map(|(idx, id)| {
                let el = document.get_element_by_id(id)?;
                Some((idx, offset + el.get_bounding_client_rect().top()))
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ids;
        Vec::new()
    }
}

/// Run `f` on the next animation frame, or right away when frames cannot be
/// requested.
pub fn on_next_frame(f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            f();
            return;
        };

        let f = Rc::new(RefCell::new(Some(f)));
        let f_for_cb = Rc::clone(&f);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(f) = f_for_cb.borrow_mut().take() {
                f();
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        if window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok()
        {
            *holder.borrow_mut() = Some(cb);
        } else if let Some(f) = f.borrow_mut().take() {
            f();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        f();
    }
}
