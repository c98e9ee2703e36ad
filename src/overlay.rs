use crate::constants::{
    ACTIVE_CLASS, HIDE_CLASS, MODAL_CAPTION_SELECTOR, MODAL_CARD_SELECTOR, MODAL_CLOSE_CLASS,
    MODAL_OVERLAY_CLASS, PRELOADER_ID,
};
use crate::context::{Activation, PageContext};
use crate::dom;
use crate::events::keyboard;
use crate::markup::{self, MODAL_BODY_SELECTOR, MODAL_FALLBACK_DESCRIPTION, MODAL_SHELL_HTML};
use gloo_timers::callback::Timeout;
use site_core::PRELOADER_FADE_MS;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide_preloader(el: &web::Element) {
    dom::add_class(el, HIDE_CLASS);
    let el = el.clone();
    Timeout::new(PRELOADER_FADE_MS, move || {
        dom::set_style(&el, "display", "none");
    })
    .forget();
}

pub fn wire_preloader(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(delay) = ctx.config.preloader_delay_ms else {
        return Ok(Activation::Skipped("no preloader on this page"));
    };
    let Some(el) = ctx.document.get_element_by_id(PRELOADER_ID) else {
        return Ok(Activation::Skipped("no preloader"));
    };
    Timeout::new(delay, move || hide_preloader(&el)).forget();
    Ok(Activation::Active)
}

struct Modal {
    overlay: web::Element,
    body: web::HtmlElement,
}

impl Modal {
    fn is_open(&self) -> bool {
        self.overlay.class_list().contains(ACTIVE_CLASS)
    }

    fn open(&self, html: &str) {
        if let Some(content) = self.overlay.query_selector(MODAL_BODY_SELECTOR).ok().flatten() {
            content.set_inner_html(html);
        }
        dom::add_class(&self.overlay, ACTIVE_CLASS);
        dom::set_style(&self.body, "overflow", "hidden");
    }

    fn close(&self) {
        dom::remove_class(&self.overlay, ACTIVE_CLASS);
        dom::set_style(&self.body, "overflow", "");
    }
}

fn card_html(card: &web::Element, index: usize) -> String {
    let title = card
        .query_selector(MODAL_CAPTION_SELECTOR)
        .ok()
        .flatten()
        .and_then(|c| c.text_content())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("Projet {}", index + 1));
    let image = card
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|img| img.dyn_into::<web::HtmlImageElement>().ok())
        .map(|img| img.src());
    let description = card
        .get_attribute("data-description")
        .unwrap_or_else(|| MODAL_FALLBACK_DESCRIPTION.to_string());
    let tags = card.get_attribute("data-tags").unwrap_or_default();
    markup::modal_body_html(&title, image.as_deref(), &description, &tags)
}

/// Project detail modal, filled from the clicked card.
pub fn wire_project_modal(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cards = dom::query_all(&ctx.document, MODAL_CARD_SELECTOR);
    if cards.is_empty() {
        return Ok(Activation::Skipped("no project cards"));
    }
    let Some(body) = ctx.document.body() else {
        return Ok(Activation::Skipped("no body"));
    };
    let overlay = ctx
        .document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create modal: {:?}", e))?;
    overlay.set_class_name(MODAL_OVERLAY_CLASS);
    overlay.set_inner_html(MODAL_SHELL_HTML);
    body.append_child(&overlay)
        .map_err(|e| anyhow::anyhow!("append modal: {:?}", e))?;
    let modal = Rc::new(Modal { overlay, body });

    for (i, card) in cards.iter().enumerate() {
        let modal = modal.clone();
        let source = card.clone();
        ctx.listen(card, "click", move |_: web::MouseEvent| {
            modal.open(&card_html(&source, i));
        });
    }

    {
        let m = modal.clone();
        ctx.listen(&modal.overlay, "click", move |ev: web::MouseEvent| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
                return;
            };
            if target == m.overlay || target.class_list().contains(MODAL_CLOSE_CLASS) {
                m.close();
            }
        });
    }

    keyboard::on_dismiss(ctx, move || {
        if modal.is_open() {
            modal.close();
        }
    });
    Ok(Activation::Active)
}
