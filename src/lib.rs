#![cfg(target_arch = "wasm32")]
use crate::context::{Activation, PageContext};
use site_core::{PageKind, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod a11y;
mod constants;
mod contact;
mod context;
mod countdown;
mod dom;
mod events;
mod frame;
mod markup;
mod media;
mod nav;
mod overlay;
mod projects;
mod reveal;
mod scroll;
mod theme;

thread_local! {
    static PAGE: RefCell<Option<Rc<PageContext>>> = const { RefCell::new(None) };
}

type Wire = fn(&PageContext) -> anyhow::Result<Activation>;

/// Wiring order matters in two places: the carousel moves project cards
/// before anything attaches to them, and telemetry subscribers are all
/// registered before the first sample is primed.
const COMPONENTS: &[(&str, Wire)] = &[
    ("preloader", overlay::wire_preloader),
    ("image-preload", media::wire_image_preload),
    ("lazy-images", media::wire_lazy_images),
    ("skip-link", a11y::wire_skip_link),
    ("keyboard-nav", a11y::wire_keyboard_nav),
    ("dark-mode", theme::wire_dark_mode),
    ("progress", scroll::wire_progress_bar),
    ("sticky-header", scroll::wire_sticky_header),
    ("back-to-top", scroll::wire_back_to_top),
    ("parallax", scroll::wire_parallax),
    ("carousel", projects::wire_carousel),
    ("section-nav", nav::wire_section_tracking),
    ("mobile-menu", nav::wire_mobile_menu),
    ("smooth-anchors", nav::wire_smooth_anchors),
    ("reveal", reveal::wire_reveal),
    ("card-effects", events::pointer::wire_card_effects),
    ("ripples", events::pointer::wire_button_ripples),
    ("button-morph", events::pointer::wire_button_morph),
    ("particles", frame::wire_particles),
    ("countdown", countdown::wire_countdown),
    ("filter", projects::wire_filter),
    ("project-modal", overlay::wire_project_modal),
    ("contact-form", contact::wire_contact_form),
    ("input-focus", a11y::wire_input_focus),
];

/// A failing component is logged and skipped; the rest still initialise.
fn activate(name: &str, result: anyhow::Result<Activation>) -> bool {
    match result {
        Ok(Activation::Active) => {
            log::debug!("[init] {name} active");
            true
        }
        Ok(Activation::Skipped(why)) => {
            log::debug!("[init] {name} skipped: {why}");
            false
        }
        Err(e) => {
            log::warn!("[init] {name} failed: {:?}", e);
            false
        }
    }
}

fn page_config(document: &web::Document) -> anyhow::Result<SiteConfig> {
    let attr = document
        .body()
        .and_then(|b| b.get_attribute("data-site"));
    let config = SiteConfig::for_page(PageKind::from_attr(attr.as_deref()));
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid {:?} config: {e}", config.page))?;
    Ok(config)
}

fn settle_motion(document: &web::Document) -> bool {
    let reduced = dom::prefers_reduced_motion(constants::REDUCED_MOTION_QUERY);
    if reduced {
        if let Some(root) = document.document_element() {
            for var in constants::MOTION_CSS_VARS {
                dom::set_style(&root, var, "0s");
            }
        }
    }
    reduced
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = page_config(&document)?;
    let reduced_motion = settle_motion(&document);
    let ctx = PageContext::new(config, reduced_motion)?;

    let page: &PageContext = &ctx;
    activate("telemetry", scroll::wire_telemetry(page));
    let active = COMPONENTS
        .iter()
        .filter(|&&(name, wire)| activate(name, wire(page)))
        .count();
    scroll::prime(page);
    log::info!(
        "[init] {:?} page: {active}/{} components active, {} listeners",
        ctx.config.page,
        COMPONENTS.len(),
        ctx.listener_count()
    );
    log::info!("[init] reduced_motion={reduced_motion}");

    let previous = PAGE.with(|p| p.borrow_mut().replace(ctx));
    if let Some(previous) = previous {
        previous.teardown();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let ready = Closure::once_into_js(run_init);
        document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
    } else {
        run_init();
    }
    Ok(())
}

/// Release every listener, timer and observer installed for the page.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if let Some(page) = page {
        page.teardown();
    }
}
