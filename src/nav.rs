//! Navigation: active-section tracking, the mobile drawer and smooth anchor
//! scrolling.

use crate::constants::{ACTIVE_CLASS, ANCHOR_SELECTOR};
use crate::context::{Activation, PageContext};
use crate::dom;
use crate::events::keyboard;
use site_core::{anchor_scroll_target, anchor_target, ActiveChange, Section, SectionTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current layout of the tracked sections. Read on every sample so late
/// layout shifts (images, fonts) are picked up.
fn read_sections(elements: &[web::Element]) -> Vec<Section> {
    elements
        .iter()
        .filter_map(|el| {
            let html = dom::as_html(el)?;
            Some(Section::new(
                el.id(),
                html.offset_top() as f64,
                html.offset_height() as f64,
            ))
        })
        .collect()
}

fn apply_change(links: &[web::Element], change: ActiveChange, class: &str) {
    if let Some(link) = change.deactivate.and_then(|i| links.get(i)) {
        dom::remove_class(link, class);
    }
    if let Some(link) = change.activate.and_then(|i| links.get(i)) {
        dom::add_class(link, class);
    }
}

pub fn wire_section_tracking(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cfg = &ctx.config.nav;
    let links = dom::query_all(&ctx.document, &cfg.links);
    if links.is_empty() {
        return Ok(Activation::Skipped("no nav links"));
    }
    let sections = dom::query_all(&ctx.document, &cfg.sections);
    if sections.is_empty() {
        return Ok(Activation::Skipped("no sections"));
    }
    let targets: Vec<Option<String>> = links
        .iter()
        .map(|link| {
            link.get_attribute("href")
                .and_then(|href| anchor_target(&href).map(str::to_string))
        })
        .collect();
    let tracker = Rc::new(RefCell::new(SectionTracker::new(
        &targets,
        cfg.lead_in_px,
        cfg.home_target.as_deref(),
        cfg.home_threshold_px,
    )));
    let class = Rc::new(cfg.active_class.clone());
    // the tracker owns the marker from here on
    for link in &links {
        dom::remove_class(link, &class);
    }
    let links = Rc::new(links);

    {
        let tracker = tracker.clone();
        let links = links.clone();
        let class = class.clone();
        ctx.telemetry.borrow_mut().subscribe(move |sample| {
            let layout = read_sections(&sections);
            let change = tracker.borrow_mut().update(&layout, sample.scroll_top);
            if let Some(change) = change {
                apply_change(&links, change, &class);
            }
        });
    }

    for (i, link) in links.iter().enumerate() {
        let tracker = tracker.clone();
        let all = links.clone();
        let class = class.clone();
        ctx.listen(link, "click", move |_: web::MouseEvent| {
            let change = tracker.borrow_mut().select(i);
            if let Some(change) = change {
                apply_change(&all, change, &class);
            }
        });
    }
    Ok(Activation::Active)
}

fn set_drawer(menu: &web::Element, toggle: &web::Element, open_class: &str, open: bool) {
    dom::set_class(menu, open_class, open);
    dom::set_class(toggle, ACTIVE_CLASS, open);
    _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

pub fn wire_mobile_menu(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cfg = &ctx.config.nav;
    let Some(toggle) = ctx.document.get_element_by_id(&cfg.toggle_id) else {
        return Ok(Activation::Skipped("no menu toggle"));
    };
    let Some(menu) = dom::query(&ctx.document, &cfg.menu) else {
        return Ok(Activation::Skipped("no menu"));
    };
    let open_class = Rc::new(cfg.open_class.clone());

    {
        let (menu, btn, open_class) = (menu.clone(), toggle.clone(), open_class.clone());
        ctx.listen(&toggle, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            let open = !menu.class_list().contains(&open_class);
            set_drawer(&menu, &btn, &open_class, open);
        });
    }

    for link in dom::query_all_within(&menu, "a") {
        let (menu, btn, open_class) = (menu.clone(), toggle.clone(), open_class.clone());
        ctx.listen(&link, "click", move |_: web::MouseEvent| {
            set_drawer(&menu, &btn, &open_class, false);
        });
    }

    {
        let (menu, btn, open_class) = (menu.clone(), toggle.clone(), open_class.clone());
        ctx.listen(&ctx.document, "click", move |ev: web::MouseEvent| {
            if !menu.class_list().contains(&open_class) {
                return;
            }
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .map(|node| menu.contains(Some(&node)) || btn.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                set_drawer(&menu, &btn, &open_class, false);
            }
        });
    }

    keyboard::on_dismiss(ctx, move || {
        if menu.class_list().contains(&open_class) {
            set_drawer(&menu, &toggle, &open_class, false);
        }
    });
    Ok(Activation::Active)
}

/// In-page anchors scroll smoothly, leaving room for the fixed header.
pub fn wire_smooth_anchors(ctx: &PageContext) -> anyhow::Result<Activation> {
    let anchors = dom::query_all(&ctx.document, ANCHOR_SELECTOR);
    if anchors.is_empty() {
        return Ok(Activation::Skipped("no in-page anchors"));
    }
    let header_id = Rc::new(ctx.config.header.header_id.clone());
    let gap = ctx.config.header.smooth_scroll_gap_px;
    for anchor in anchors {
        let document = ctx.document.clone();
        let header_id = header_id.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        ctx.listen(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            let header_height = document
                .get_element_by_id(&header_id)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            let top = anchor_scroll_target(target.offset_top() as f64, header_height, gap);
            dom::smooth_scroll_to(top);
        });
    }
    Ok(Activation::Active)
}
