use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    add_listener(element, "click", move |_: web::MouseEvent| handler());
}

/// Match the canvas backing store to its CSS box at device resolution.
/// Returns the CSS size, which is the coordinate space the engine draws in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    canvas.set_width(((rect.width() * dpr) as u32).max(1));
    canvas.set_height(((rect.height() * dpr) as u32).max(1));
    (rect.width() as f32, rect.height() as f32)
}
