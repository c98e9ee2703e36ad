//! One-shot reveal of content blocks entering the viewport.
//!
//! Uses the platform IntersectionObserver when the browser provides one and
//! falls back to geometric checks on scroll telemetry otherwise. Either way the
//! `RevealController` decides when a block flips, and it never flips back.

use crate::context::{Activation, ObserverCallback, PageContext};
use crate::dom;
use site_core::{intersection_ratio, IntersectionReport, RevealController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const INDEX_ATTR: &str = "data-reveal-index";

pub fn wire_reveal(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cfg = &ctx.config.reveal;
    let elements = dom::query_all(&ctx.document, &cfg.selector());
    if elements.is_empty() {
        return Ok(Activation::Skipped("nothing to reveal"));
    }
    if ctx.reduced_motion {
        for el in &elements {
            dom::add_class(el, &cfg.revealed_class);
        }
        return Ok(Activation::Active);
    }
    for (i, el) in elements.iter().enumerate() {
        _ = el.set_attribute(INDEX_ATTR, &i.to_string());
        if let Some(ready) = &cfg.ready_class {
            dom::add_class(el, ready);
        }
    }
    let controller = Rc::new(RefCell::new(RevealController::new(
        elements.len(),
        cfg.threshold,
        cfg.bottom_margin_px,
    )));
    log::debug!("[reveal] watching {} elements", elements.len());

    match observe_with_platform(ctx, &controller, &elements) {
        Ok(()) => {}
        Err(e) => {
            log::info!("[reveal] IntersectionObserver unavailable ({e}); using scroll checks");
            observe_with_telemetry(ctx, controller, elements);
        }
    }
    Ok(Activation::Active)
}

fn observe_with_platform(
    ctx: &PageContext,
    controller: &Rc<RefCell<RevealController>>,
    elements: &[web::Element],
) -> anyhow::Result<()> {
    let revealed_class = ctx.config.reveal.revealed_class.clone();
    let ctl = controller.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let report = IntersectionReport {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if ctl.borrow_mut().observe(index, report) {
                    dom::add_class(&target, &revealed_class);
                    observer.unobserve(&target);
                }
            }
            if ctl.borrow().is_complete() {
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let (threshold, root_margin) = {
        let c = controller.borrow();
        (c.threshold(), c.root_margin())
    };
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(&root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for el in elements {
        observer.observe(el);
    }
    ctx.keep_observer(observer, callback);
    Ok(())
}

fn observe_with_telemetry(
    ctx: &PageContext,
    controller: Rc<RefCell<RevealController>>,
    elements: Vec<web::Element>,
) {
    let revealed_class = ctx.config.reveal.revealed_class.clone();
    ctx.telemetry.borrow_mut().subscribe(move |sample| {
        let mut ctl = controller.borrow_mut();
        if ctl.is_complete() {
            return;
        }
        let margin = ctl.bottom_margin_px();
        for (i, el) in elements.iter().enumerate() {
            let rect = el.get_bounding_client_rect();
            let report =
                intersection_ratio(rect.top(), rect.height(), sample.viewport_height, margin);
            if ctl.observe(i, report) {
                dom::add_class(el, &revealed_class);
            }
        }
    });
}
