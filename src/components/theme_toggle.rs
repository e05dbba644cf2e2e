//! Header button switching between the dark and slate themes.

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeController};
use crate::util::storage::LocalStorage;

/// Theme state shared through context, backed by `localStorage`.
pub type SiteTheme = ThemeController<LocalStorage>;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<SiteTheme>>();

    let on_click = move |_| {
        theme.update(|t| {
            t.toggle();
        });
    };
    let label = move || {
        let next = theme.with(SiteTheme::current).toggled();
        match next {
            Theme::Dark => "Switch to dark theme",
            Theme::Slate => "Switch to slate theme",
        }
    };

    view! {
        <button class="btn theme-toggle" type="button" on:click=on_click aria-label=label title=label>
            {move || theme.with(SiteTheme::current).toggle_icon()}
        </button>
    }
}
