//! Contact form with client-side validation and async submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field values, status text, and button state all live in one
//! `ContactFormState` signal; `net::contact::submit` drives it through an
//! attempt while this component only renders it and handles focus/reset on
//! the real DOM form.

use leptos::prelude::*;

use crate::state::contact::{ContactFormState, FieldKind, FormField};
#[cfg(feature = "csr")]
use crate::state::contact::Attempt;

/// The contact form, posting to `endpoint`.
#[component]
pub fn ContactForm(#[prop(into)] endpoint: String) -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            use crate::net::contact::{BrowserTransport, submit};

            let endpoint = endpoint.clone();
            let transport = form_ref
                .get_untracked()
                .map_or_else(BrowserTransport::default, BrowserTransport::with_form);
            leptos::task::spawn_local(async move {
                match submit(&form, &transport, &endpoint).await {
                    Attempt::Invalid { focus: Some(name), .. } => focus_field(form_ref, &name),
                    Attempt::Sent => {
                        if let Some(el) = form_ref.get_untracked() {
                            el.reset();
                        }
                    }
                    _ => {}
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&endpoint, form_ref);
        }
    };

    let form_class = move || {
        if form.with(|f| f.show_errors) {
            "contact-form show-errors"
        } else {
            "contact-form"
        }
    };
    let status_class = move || match form.with(|f| f.status.css_class()) {
        Some(extra) => format!("form-status {extra}"),
        None => "form-status".to_owned(),
    };

    let fields = form
        .get_untracked()
        .fields
        .into_iter()
        .map(|field| view! { <FieldRow form=form field=field/> })
        .collect_view();

    view! {
        <form class=form_class node_ref=form_ref novalidate=true on:submit=on_submit>
            {fields}
            <button type="submit" class="btn contact-form__submit" disabled=move || form.with(|f| f.sending)>
                {move || form.with(ContactFormState::button_label)}
            </button>
            <p class=status_class role="status" aria-live="polite">
                {move || form.with(|f| f.status.message())}
            </p>
        </form>
    }
}

/// One labeled control bound to its field in `form`.
#[component]
fn FieldRow(form: RwSignal<ContactFormState>, field: FormField) -> impl IntoView {
    let FormField {
        name,
        label,
        kind,
        required,
        ..
    } = field;
    let id = format!("contact-{name}");
    let value = {
        let name = name.clone();
        move || form.with(|f| f.value(&name).to_owned())
    };
    let on_input = {
        let name = name.clone();
        move |ev: leptos::ev::Event| {
            let next = event_target_value(&ev);
            form.update(|f| f.set_value(&name, next));
        }
    };

    let control = match kind {
        FieldKind::TextArea => view! {
            <textarea id=id.clone() name=name.clone() required=required rows="5" prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        FieldKind::File => view! {
            <input id=id.clone() name=name.clone() type="file" required=required on:change=on_input/>
        }
        .into_any(),
        FieldKind::Email | FieldKind::Text => {
            let input_type = if kind == FieldKind::Email { "email" } else { "text" };
            view! {
                <input id=id.clone() name=name.clone() type=input_type required=required prop:value=value on:input=on_input/>
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            {control}
        </div>
    }
}

#[cfg(feature = "csr")]
fn focus_field(form_ref: NodeRef<leptos::html::Form>, name: &str) {
    use wasm_bindgen::JsCast;

    let Some(form_el) = form_ref.get_untracked() else {
        return;
    };
    let selector = format!("[name=\"{name}\"]");
    if let Some(el) = form_el
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
