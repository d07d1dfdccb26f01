use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::MAX_PIXEL_RATIO;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to an event target; the closure lives for the page.
#[inline]
pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing store to its CSS size, with devicePixelRatio
/// capped at `MAX_PIXEL_RATIO`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Read the value of a named form field, input or textarea.
pub fn field_value(document: &web::Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlTextAreaElement>().map(|t| t.value())
}
