//! Content card whose description and media expand on demand.
//!
//! Expanding a card that ends below the fold scrolls it into view shortly
//! after, so the revealed text is not hidden off screen.

use leptos::prelude::*;

use crate::config::CardConfig;
use crate::state::cards::CardState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ExpandableCard(card: CardConfig, #[prop(optional)] lazy_images: bool) -> impl IntoView {
    let state = RwSignal::new(CardState::default());
    let card_ref = NodeRef::<leptos::html::Article>::new();
    let description_html = render_markdown_html(&card.description);

    let on_toggle = move |_| {
        let expanded = state.try_update(CardState::toggle).unwrap_or(false);

        #[cfg(feature = "csr")]
        {
            use crate::state::cards::{SCROLL_INTO_VIEW_DELAY_MS, is_partially_off_screen};
            use crate::util::scroll::{Block, smooth_scroll_into_view, viewport_height};

            if !expanded {
                return;
            }
            let Some(el) = card_ref.get_untracked() else {
                return;
            };
            let bottom = el.get_bounding_client_rect().bottom();
            if is_partially_off_screen(bottom, viewport_height()) {
                gloo_timers::callback::Timeout::new(SCROLL_INTO_VIEW_DELAY_MS, move || {
                    smooth_scroll_into_view(&el, Block::Nearest);
                })
                .forget();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (expanded, card_ref);
        }
    };

    let media = card.media.map(|media| {
        let (src, data_src) = if lazy_images {
            (None, Some(media.src))
        } else {
            (Some(media.src), None)
        };
        view! {
            <div class=move || state.get().class_with("card-media")>
                <img src=src data-src=data_src alt=media.alt/>
            </div>
        }
    });

    view! {
        <article class="card" node_ref=card_ref>
            <h3 class="card-title">{card.title}</h3>
            <p class="card-summary">{card.summary}</p>
            {media}
            <div class=move || state.get().class_with("card-description") inner_html=description_html></div>
            <button
                type="button"
                class=move || state.get().class_with("expand-btn")
                aria-label=move || state.get().aria_label()
                aria-expanded=move || state.get().expanded.to_string()
                on:click=on_toggle
            >
                <span class="expand-text">{move || state.get().button_text()}</span>
            </button>
        </article>
    }
}
