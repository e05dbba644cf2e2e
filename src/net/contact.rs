//! Contact form transport and the submit workflow.
//!
//! Client-side (csr): real multipart POST via `gloo-net`.
//! Host builds: the browser transport reports a transport failure, and tests
//! plug in their own `SubmitTransport`.
//!
//! ERROR HANDLING
//! ==============
//! The workflow never panics on a failed request. Every attempt that reached
//! the network settles through `ContactFormState::complete`, which re-enables the
//! submit button whatever the outcome.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::state::contact::{Attempt, ContactFormState, FormPayload};

/// Why a request that was issued did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status.
    #[error("server rejected submission: {status}")]
    Server { status: u16 },
    /// The request never completed (offline, DNS, aborted, CORS).
    #[error("request failed: {0}")]
    Transport(String),
}

/// Sends one form submission to an endpoint.
#[allow(async_fn_in_trait)]
pub trait SubmitTransport {
    /// POST `payload` to `endpoint`. Any 2xx counts as accepted.
    ///
    /// # Errors
    ///
    /// `SubmitError::Server` for non-2xx responses, `SubmitError::Transport`
    /// when no response arrived.
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<(), SubmitError>;
}

/// Shared handle to a `ContactFormState` that can be mutated between await points.
pub trait FormCell {
    /// Run `f` against the form. `None` when the form no longer exists.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R>;
}

impl FormCell for RwSignal<ContactFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormCell for RefCell<ContactFormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one submit attempt end to end.
///
/// Validation failures return before any request. Otherwise exactly one
/// `post` is issued and its outcome is written back to the form.
pub async fn submit<C, T>(cell: &C, transport: &T, endpoint: &str) -> Attempt
where
    C: FormCell,
    T: SubmitTransport,
{
    let payload = match cell.with_form(ContactFormState::prepare) {
        Some(Ok(payload)) => payload,
        Some(Err(attempt)) => return attempt,
        None => return Attempt::Busy,
    };

    let result = transport.post(endpoint, &payload).await;
    match &result {
        Ok(()) => log::debug!("contact submission accepted by {endpoint}"),
        Err(e) => log::debug!("contact submission to {endpoint} failed: {e}"),
    }

    // Form disposed mid-flight: nothing left to update.
    cell.with_form(|form| form.complete(result))
        .unwrap_or(Attempt::Busy)
}

/// `fetch`-backed transport encoding the body as `multipart/form-data`.
///
/// When built around the rendered `<form>`, the body is taken from the form
/// element itself so file inputs travel too; otherwise the payload entries
/// are appended one by one.
#[derive(Clone, Default)]
pub struct BrowserTransport {
    #[cfg(feature = "csr")]
    form: Option<web_sys::HtmlFormElement>,
}

impl BrowserTransport {
    #[cfg(feature = "csr")]
    pub fn with_form(form: web_sys::HtmlFormElement) -> Self {
        Self { form: Some(form) }
    }

    #[cfg(feature = "csr")]
    fn form_data(&self, payload: &FormPayload) -> Result<web_sys::FormData, SubmitError> {
        let js_err = |e: wasm_bindgen::JsValue| SubmitError::Transport(format!("{e:?}"));
        if let Some(form) = &self.form {
            return web_sys::FormData::new_with_form(form).map_err(js_err);
        }
        let data = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &payload.entries {
            data.append_with_str(name, value).map_err(js_err)?;
        }
        Ok(data)
    }
}

impl SubmitTransport for BrowserTransport {
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<(), SubmitError> {
        #[cfg(feature = "csr")]
        {
            let body = self.form_data(payload)?;
            let resp = gloo_net::http::Request::post(endpoint)
                .body(body)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(SubmitError::Server { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, payload);
            Err(SubmitError::Transport("not available outside the browser".to_owned()))
        }
    }
}
