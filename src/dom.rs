use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order. An invalid selector
/// is treated as matching nothing.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all_within(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<&web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>()
}

#[inline]
pub fn set_style(el: &web::Element, prop: &str, value: &str) {
    if let Some(h) = as_html(el) {
        _ = h.style().set_property(prop, value);
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Click listener for short-lived elements; the closure lives as long as the
/// page.
pub fn on_click(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(web::MouseEvent)>
    );
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing store to the viewport and return its size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let (w, h) = viewport_size();
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
    (w, h)
}

/// Smooth-scroll the window to a document offset.
pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn prefers_reduced_motion(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
