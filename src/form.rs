use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{ContactMessage, LogSink, MessageSink, ACKNOWLEDGMENT};
use crate::dom;

/// Intercept contact-form submission: deliver through the sink, then
/// acknowledge and clear the fields only on success.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = document
        .get_element_by_id("contact-form")
        .ok_or_else(|| anyhow::anyhow!("missing #contact-form"))?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let document = document.clone();
    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let message = ContactMessage {
            name: dom::field_value(&document, "name").unwrap_or_default(),
            email: dom::field_value(&document, "email").unwrap_or_default(),
            message: dom::field_value(&document, "message").unwrap_or_default(),
        };
        match LogSink.deliver(&message) {
            Ok(()) => {
                if let Some(window) = web::window() {
                    let _ = window.alert_with_message(ACKNOWLEDGMENT);
                }
                form_for_submit.reset();
            }
            Err(e) => log::error!("contact delivery failed: {e}"),
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}
