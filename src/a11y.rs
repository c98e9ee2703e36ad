//! Keyboard and focus affordances: skip link, keyboard-navigation marker and
//! focused form fields.

use crate::constants::{FOCUSED_CLASS, FORM_FIELD_SELECTOR};
use crate::context::{Activation, PageContext};
use crate::dom;
use crate::events::keys::{enters_keyboard_nav, KEYBOARD_NAV_CLASS};
use crate::markup::{
    skip_link_top, SKIP_LINK_CLASS, SKIP_LINK_HREF, SKIP_LINK_STYLE, SKIP_LINK_TEXT,
};
use web_sys as web;

/// Insert a "skip to content" link as the first child of the body. It stays
/// above the viewport until it receives focus.
pub fn wire_skip_link(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(body) = ctx.document.body() else {
        return Ok(Activation::Skipped("no body"));
    };
    let link = ctx
        .document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("create skip link: {:?}", e))?;
    _ = link.set_attribute("href", SKIP_LINK_HREF);
    link.set_class_name(SKIP_LINK_CLASS);
    link.set_text_content(Some(SKIP_LINK_TEXT));
    _ = link.set_attribute("style", SKIP_LINK_STYLE);
    body.insert_before(&link, body.first_child().as_ref())
        .map_err(|e| anyhow::anyhow!("insert skip link: {:?}", e))?;

    for (event, focused) in [("focus", true), ("blur", false)] {
        let el = link.clone();
        ctx.listen(&link, event, move |_: web::Event| {
            dom::set_style(&el, "top", skip_link_top(focused));
        });
    }
    Ok(Activation::Active)
}

/// Mark the body while the visitor navigates with Tab; any mouse press
/// clears the mark.
pub fn wire_keyboard_nav(ctx: &PageContext) -> anyhow::Result<Activation> {
    let Some(body) = ctx.document.body() else {
        return Ok(Activation::Skipped("no body"));
    };
    let body: web::Element = body.into();
    let marked = body.clone();
    ctx.listen(&ctx.document, "keydown", move |ev: web::KeyboardEvent| {
        if enters_keyboard_nav(&ev.key()) {
            dom::add_class(&marked, KEYBOARD_NAV_CLASS);
        }
    });
    ctx.listen(&ctx.document, "mousedown", move |_: web::MouseEvent| {
        dom::remove_class(&body, KEYBOARD_NAV_CLASS);
    });
    Ok(Activation::Active)
}

/// Toggle `focused` on the wrapper of whichever form field has focus.
pub fn wire_input_focus(ctx: &PageContext) -> anyhow::Result<Activation> {
    let fields = dom::query_all(&ctx.document, FORM_FIELD_SELECTOR);
    if fields.is_empty() {
        return Ok(Activation::Skipped("no form fields"));
    }
    let mut wired = 0usize;
    for field in &fields {
        let Some(parent) = field.parent_element() else {
            continue;
        };
        for (event, focused) in [("focus", true), ("blur", false)] {
            let parent = parent.clone();
            ctx.listen(field, event, move |_: web::Event| {
                dom::set_class(&parent, FOCUSED_CLASS, focused);
            });
        }
        wired += 1;
    }
    log::debug!("[a11y] focus marks on {wired}/{} fields", fields.len());
    Ok(Activation::Active)
}
