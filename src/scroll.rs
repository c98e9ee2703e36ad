//! Scroll telemetry wiring and the components that only react to scroll
//! position: progress bar, sticky header, back-to-top button and parallax.

use crate::constants::{PROGRESS_BAR_STYLE, SCROLLED_CLASS, VISIBLE_CLASS};
use crate::context::{Activation, PageContext};
use crate::dom;
use crate::markup;
use gloo_timers::callback::Timeout;
use instant::Instant;
use site_core::{
    back_to_top_visible, parallax_offset, parse_speed, width_style, ProgressIndicator,
    ScrollSample, StickyHeader,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Read the current scroll geometry of the page.
pub fn read_sample(window: &web::Window, document: &web::Document) -> Option<ScrollSample> {
    let scroll_top = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = document.document_element()?.scroll_height() as f64;
    Some(ScrollSample::new(scroll_top, viewport_height, document_height))
}

/// Route window scroll and resize notifications through the shared throttle.
pub fn wire_telemetry(ctx: &PageContext) -> anyhow::Result<Activation> {
    let telemetry = ctx.telemetry.clone();
    let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let window = ctx.window.clone();
    let document = ctx.document.clone();

    let on_notify: Rc<dyn Fn()> = Rc::new(move || {
        let Some(sample) = read_sample(&window, &document) else {
            return;
        };
        let delay = telemetry.borrow_mut().notify(Instant::now(), sample);
        if let Some(delay) = delay {
            let telemetry = telemetry.clone();
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            // replaces a timeout that has already fired; at most one is pending
            *trailing.borrow_mut() = Some(Timeout::new(millis, move || {
                telemetry.borrow_mut().flush(Instant::now());
            }));
        }
    });

    for event in ["scroll", "resize"] {
        let notify = on_notify.clone();
        ctx.listen(&ctx.window, event, move |_: web::Event| notify());
    }
    log::debug!(
        "[scroll] telemetry throttled to {}ms",
        ctx.config.throttle.as_millis()
    );
    Ok(Activation::Active)
}

/// Deliver the current geometry to every subscriber once, unthrottled, so
/// components reflect the initial scroll position before the first event.
pub fn prime(ctx: &PageContext) {
    if let Some(sample) = read_sample(&ctx.window, &ctx.document) {
        ctx.telemetry.borrow_mut().dispatch(sample);
    }
}

pub fn wire_progress_bar(ctx: &PageContext) -> anyhow::Result<Activation> {
    let bar = match dom::query(&ctx.document, &ctx.config.progress_bar) {
        Some(bar) => bar,
        None => {
            let Some(class) = markup::class_of_selector(&ctx.config.progress_bar) else {
                return Ok(Activation::Skipped("no progress bar and selector is not a class"));
            };
            let Some(body) = ctx.document.body() else {
                return Ok(Activation::Skipped("no body"));
            };
            let bar = ctx
                .document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create progress bar: {:?}", e))?;
            bar.set_class_name(class);
            _ = bar.set_attribute("style", PROGRESS_BAR_STYLE);
            body.append_child(&bar)
                .map_err(|e| anyhow::anyhow!("append progress bar: {:?}", e))?;
            log::debug!("[scroll] created progress bar .{class}");
            bar
        }
    };
    let mut indicator = ProgressIndicator::new();
    ctx.telemetry.borrow_mut().subscribe(move |sample| {
        if let Some(percent) = indicator.update(sample) {
            dom::set_style(&bar, "width", &width_style(percent));
        }
    });
    Ok(Activation::Active)
}

pub fn wire_sticky_header(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cfg = &ctx.config.header;
    let Some(header) = ctx.document.get_element_by_id(&cfg.header_id) else {
        return Ok(Activation::Skipped("no header"));
    };
    let mut sticky = StickyHeader::new(cfg.scrolled_after_px, cfg.hide_after_px);
    ctx.telemetry.borrow_mut().subscribe(move |sample| {
        if let Some(state) = sticky.update(sample.scroll_top) {
            dom::set_class(&header, SCROLLED_CLASS, state.scrolled);
            let shift = if state.hidden { "translateY(-100%)" } else { "translateY(0)" };
            dom::set_style(&header, "transform", shift);
        }
    });
    Ok(Activation::Active)
}

pub fn wire_back_to_top(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cfg = &ctx.config.header;
    let Some(button) = ctx.document.get_element_by_id(&cfg.back_to_top_id) else {
        return Ok(Activation::Skipped("no back-to-top button"));
    };
    let threshold = cfg.back_to_top_after_px;
    let shown = button.clone();
    let mut last: Option<bool> = None;
    ctx.telemetry.borrow_mut().subscribe(move |sample| {
        let visible = back_to_top_visible(sample.scroll_top, threshold);
        if last != Some(visible) {
            dom::set_class(&shown, VISIBLE_CLASS, visible);
            last = Some(visible);
        }
    });
    ctx.listen(&button, "click", |ev: web::MouseEvent| {
        ev.prevent_default();
        dom::smooth_scroll_to(0.0);
    });
    Ok(Activation::Active)
}

pub fn wire_parallax(ctx: &PageContext) -> anyhow::Result<Activation> {
    if ctx.reduced_motion {
        return Ok(Activation::Skipped("reduced motion"));
    }
    let default_speed = ctx.config.header.parallax_speed;
    let selector = &ctx.config.header.parallax;
    let layers: Vec<(web::Element, f64)> = dom::query_all(&ctx.document, selector)
        .into_iter()
        .map(|el| {
            let speed = parse_speed(el.get_attribute("data-speed").as_deref(), default_speed);
            (el, speed)
        })
        .collect();
    if layers.is_empty() {
        return Ok(Activation::Skipped("no parallax layers"));
    }
    ctx.telemetry.borrow_mut().subscribe(move |sample| {
        for (el, speed) in &layers {
            let offset = parallax_offset(sample.scroll_top, *speed);
            dom::set_style(el, "transform", &markup::translate_y_px(offset));
        }
    });
    Ok(Activation::Active)
}
