//! A top-level page section: heading, intro, cards, optional contact form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::expandable_card::ExpandableCard;
use crate::config::SectionConfig;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn PageSection(
    section: SectionConfig,
    #[prop(into)] contact_endpoint: String,
    #[prop(optional)] lazy_images: bool,
) -> impl IntoView {
    let SectionConfig {
        id,
        label,
        intro,
        cards,
        contact_form,
    } = section;
    let intro_html = render_markdown_html(&intro);

    let cards = (!cards.is_empty()).then(|| {
        let cards = cards
            .into_iter()
            .map(|card| view! { <ExpandableCard card=card lazy_images=lazy_images/> })
            .collect_view();
        view! { <div class="cards">{cards}</div> }
    });
    let form = contact_form.then(|| view! { <ContactForm endpoint=contact_endpoint/> });

    view! {
        <section id=id class="section">
            <h2 class="section-title">{label}</h2>
            <div class="section-intro" inner_html=intro_html></div>
            {cards}
            {form}
        </section>
    }
}
