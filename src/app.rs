//! Root application component: theme context, page shell, page-level listeners.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use send_wrapper::SendWrapper;

use crate::components::mini_map::{MiniMap, MiniMapItem};
use crate::components::page_section::PageSection;
use crate::components::theme_toggle::{SiteTheme, ThemeToggle};
use crate::config::SiteConfig;
use crate::util::storage::LocalStorage;
use crate::util::{anchors, lazy_images, theme};

/// Root application component.
///
/// Resolves the theme before first paint, provides it as context, and once
/// mounted installs the document-wide behaviors (smooth anchors, lazy images)
/// and marks `<body>` as `loaded`.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let site_theme = RwSignal::new(SiteTheme::load(LocalStorage, theme::system_prefers_dark()));
    provide_context(site_theme);

    theme::apply(site_theme.with_untracked(SiteTheme::current));
    Effect::new(move || theme::apply(site_theme.with(SiteTheme::current)));
    let watch = SendWrapper::new(theme::watch_system_preference(move |prefers_dark| {
        site_theme.update(|t| {
            if let Some(next) = t.system_changed(prefers_dark) {
                log::debug!("following system theme: {}", next.class_name());
            }
        });
    }));
    on_cleanup(move || drop(watch.take()));

    let lazy = config.lazy_images;
    Effect::new(move || {
        let anchors = SendWrapper::new(anchors::install_smooth_anchors());
        on_cleanup(move || drop(anchors.take()));
        if lazy {
            lazy_images::install_lazy_images();
        }
        theme::mark_loaded();
    });

    let SiteConfig {
        title,
        contact_endpoint,
        sections,
        ..
    } = config;

    let map_items: Vec<MiniMapItem> = sections
        .iter()
        .map(|s| MiniMapItem {
            target: s.id.clone(),
            label: s.label.clone(),
        })
        .collect();
    let sections = sections
        .into_iter()
        .map(|section| {
            view! {
                <PageSection section=section contact_endpoint=contact_endpoint.clone() lazy_images=lazy/>
            }
        })
        .collect_view();

    view! {
        <Title text=title.clone()/>
        <header class="site-header">
            <a class="site-title" href="#top">{title}</a>
            <ThemeToggle/>
        </header>
        <MiniMap items=map_items/>
        <main id="top" class="site-main">
            {sections}
        </main>
    }
}
