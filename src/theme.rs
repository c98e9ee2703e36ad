use crate::constants::{DARK_MODE_CLASS, DARK_MODE_TOGGLE_ID, TOGGLE_PRESS_MS};
use crate::context::{Activation, PageContext};
use crate::dom;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use site_core::{ThemePreference, DARK_MODE_STORAGE_KEY};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn apply(body: &web::HtmlElement, toggle: &web::Element, pref: ThemePreference) {
    dom::set_class(body, DARK_MODE_CLASS, pref.dark);
    toggle.set_text_content(Some(pref.toggle_icon()));
}

/// Dark mode toggle, persisted across visits.
pub fn wire_dark_mode(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(toggle) = ctx.document.get_element_by_id(DARK_MODE_TOGGLE_ID) else {
        return Ok(Activation::Skipped("no dark mode toggle"));
    };
    let Some(body) = ctx.document.body() else {
        return Ok(Activation::Skipped("no body"));
    };
    let stored = LocalStorage::get::<bool>(DARK_MODE_STORAGE_KEY).ok();
    let pref = ThemePreference::from_stored(stored);
    apply(&body, &toggle, pref);
    log::debug!("[theme] dark={} (stored={:?})", pref.dark, stored);

    let state = Rc::new(Cell::new(pref));
    let button = toggle.clone();
    ctx.listen(&toggle, "click", move |_: web::MouseEvent| {
        let next = state.get().toggled();
        state.set(next);
        apply(&body, &button, next);
        if let Err(e) = LocalStorage::set(DARK_MODE_STORAGE_KEY, next.dark) {
            log::warn!("[theme] cannot persist preference: {e}");
        }
        dom::set_style(&button, "transform", "scale(0.8)");
        let pressed = button.clone();
        Timeout::new(TOGGLE_PRESS_MS, move || {
            dom::set_style(&pressed, "transform", "scale(1)");
        })
        .forget();
    });
    Ok(Activation::Active)
}
