use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
        );
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        // pixel ratio range [1, 1.5]
        let dpr = w.device_pixel_ratio().clamp(1.0, 1.5);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        } else {
            _ = cl.add_1("hidden");
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "display:none");
        }
    }
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn location_hash() -> String {
    web::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn location_href() -> Option<String> {
    web::window().and_then(|w| w.location().href().ok())
}

/// Rewrite the URL fragment without adding a history entry.
pub fn replace_hash(fragment: &str) {
    if let Some(history) = web::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(fragment)) {
            log::warn!("[dom] replaceState failed: {:?}", e);
        }
    }
}

pub fn page_height_px() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0) as f32
}
