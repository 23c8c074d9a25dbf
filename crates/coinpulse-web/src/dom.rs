use coinpulse_core::ClientRect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn client_rect(el: &web::Element) -> ClientRect {
    let r = el.get_bounding_client_rect();
    ClientRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32
}

/// Listener options shared by every tracker: never calls `preventDefault`.
pub fn passive_options() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// `document.createElement` with an optional class list and text.
pub fn create(
    document: &web::Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    if let Some(c) = class {
        el.set_class_name(c);
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    Some(el)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) {
    let _ = parent.append_child(child);
}

#[inline]
pub fn clear(el: &web::Element) {
    el.set_text_content(None);
}
