//! Scroll-spy mini-map highlighting the section currently in view.
//!
//! ARCHITECTURE
//! ============
//! Window scroll events are coalesced to one recomputation per animation
//! frame; the recomputation measures section offsets and defers the choice to
//! `state::scroll_spy::active_section`.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use send_wrapper::SendWrapper;

use crate::util::scroll::{Block, smooth_scroll_to_id};

/// One mini-map entry: target section id and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiniMapItem {
    pub target: String,
    pub label: String,
}

#[component]
pub fn MiniMap(items: Vec<MiniMapItem>) -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    #[cfg(feature = "csr")]
    {
        let ids: Vec<String> = items.iter().map(|item| item.target.clone()).collect();
        let ids = std::rc::Rc::new(ids);

        let refresh_ids = std::rc::Rc::clone(&ids);
        Effect::new(move || refresh_active(&refresh_ids, active));

        if let Some(teardown) = install_scroll_listener(ids, active) {
            let teardown = SendWrapper::new(teardown);
            on_cleanup(move || {
                let (listener, throttle) = teardown.take();
                throttle.borrow_mut().stop();
                drop(listener);
            });
        }
    }

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let MiniMapItem { target, label } = item;
            let class = move || {
                if active.get() == Some(idx) {
                    "mini-map-item active"
                } else {
                    "mini-map-item"
                }
            };
            let on_click = {
                let target = target.clone();
                move |_| {
                    smooth_scroll_to_id(&target, Block::Start);
                }
            };
            view! {
                <li>
                    <button type="button" class=class data-target=target on:click=on_click>
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="mini-map" aria-label="Section navigation">
            <ul>{entries}</ul>
        </nav>
    }
}

/// Recompute the highlighted item from the current scroll position.
///
/// Items whose section is missing from the page never become active; with no
/// sections at all nothing is highlighted.
#[cfg(feature = "csr")]
fn refresh_active(ids: &[String], active: RwSignal<Option<usize>>) {
    use crate::state::scroll_spy::active_section;
    use crate::util::scroll::{scroll_y, section_tops, viewport_height};

    let present = section_tops(ids);
    let tops: Vec<f64> = present.iter().map(|(_, top)| *top).collect();
    let next = active_section(scroll_y(), viewport_height(), &tops).map(|pos| present[pos].0);
    let Some(current) = active.try_get_untracked() else {
        return;
    };
    if current != next {
        let _ = active.try_set(next);
    }
}

#[cfg(feature = "csr")]
type ScrollTeardown = (
    crate::util::listener::EventListener,
    std::rc::Rc<std::cell::RefCell<crate::state::scroll_spy::FrameThrottle>>,
);

/// Listen for window scrolls, refreshing `active` at most once per frame.
///
/// The caller owns the returned listener and throttle; dropping the listener
/// detaches it and stopping the throttle cancels a frame already queued.
#[cfg(feature = "csr")]
fn install_scroll_listener(ids: std::rc::Rc<Vec<String>>, active: RwSignal<Option<usize>>) -> Option<ScrollTeardown> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::state::scroll_spy::FrameThrottle;
    use crate::util::listener::EventListener;
    use crate::util::scroll::on_next_frame;

    let window = web_sys::window()?;
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));

    let frame_throttle = Rc::clone(&throttle);
    let listener = EventListener::new(&window, "scroll", move |_| {
        if !frame_throttle.borrow_mut().request() {
            return;
        }
        let ids = Rc::clone(&ids);
        let throttle = Rc::clone(&frame_throttle);
        on_next_frame(move || {
            if throttle.borrow_mut().complete() {
                refresh_active(&ids, active);
            }
        });
    })?;
    Some((listener, throttle))
}
