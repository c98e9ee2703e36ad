//! Image loading: deferred `data-src` images and preload hints for critical
//! ones.

use crate::constants::{LAZY_IMAGE_SELECTOR, LAZY_SOURCE_ATTR, PRELOAD_IMAGE_SELECTOR};
use crate::context::{Activation, ObserverCallback, PageContext};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Move `data-src` into `src`. Returns false if there was nothing to load.
fn load_deferred(img: &web::Element) -> bool {
    let Some(src) = img.get_attribute(LAZY_SOURCE_ATTR) else {
        return false;
    };
    _ = img.set_attribute("src", &src);
    _ = img.remove_attribute(LAZY_SOURCE_ATTR);
    true
}

/// Whether `HTMLImageElement.prototype` has a `loading` property.
fn native_lazy_loading(window: &web::Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|ctor| js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")))
        .and_then(|proto| js_sys::Reflect::has(&proto, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

fn observe_deferred(ctx: &PageContext, images: &[web::Element]) -> anyhow::Result<()> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let img = entry.target();
                    load_deferred(&img);
                    observer.unobserve(&img);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for img in images {
        observer.observe(img);
    }
    ctx.keep_observer(observer, callback);
    Ok(())
}

pub fn wire_lazy_images(ctx: &PageContext) -> anyhow::Result<Activation> {
    let images = dom::query_all(&ctx.document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(Activation::Skipped("no deferred images"));
    }
    if native_lazy_loading(&ctx.window) {
        let loaded = images.iter().filter(|img| load_deferred(img)).count();
        log::debug!("[media] {loaded} images handed to native lazy loading");
        return Ok(Activation::Active);
    }
    if let Err(e) = observe_deferred(ctx, &images) {
        log::info!("[media] IntersectionObserver unavailable ({e}); loading images now");
        for img in &images {
            load_deferred(img);
        }
    }
    Ok(Activation::Active)
}

/// Add a `<link rel=preload as=image>` to the head for each critical image.
pub fn wire_image_preload(ctx: &PageContext) -> anyhow::Result<Activation> {
    let images = dom::query_all(&ctx.document, PRELOAD_IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(Activation::Skipped("no images to preload"));
    }
    let head = ctx
        .document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no document head"))?;
    for img in &images {
        let Some(img) = img.dyn_ref::<web::HtmlImageElement>() else {
            continue;
        };
        let link = ctx
            .document
            .create_element("link")
            .map_err(|e| anyhow::anyhow!("create preload link: {:?}", e))?;
        _ = link.set_attribute("rel", "preload");
        _ = link.set_attribute("as", "image");
        _ = link.set_attribute("href", &img.src());
        head.append_child(&link)
            .map_err(|e| anyhow::anyhow!("append preload link: {:?}", e))?;
    }
    log::debug!("[media] preloading {} images", images.len());
    Ok(Activation::Active)
}
