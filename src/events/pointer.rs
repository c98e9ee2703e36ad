//! Pointer micro-interactions on cards and buttons.

use crate::context::{Activation, PageContext};
use crate::dom;
use crate::markup::{self, RIPPLE_KEYFRAMES, RIPPLE_STYLE_ID};
use glam::Vec2;
use gloo_timers::callback::Timeout;
use site_core::interact::{
    hover_enter_transform, hover_leave_transform, ripple_geometry, tilt_angles, tilt_transform,
    BUTTON_MORPH_SHADOW, BUTTON_MORPH_TRANSFORM, BUTTON_REST_SHADOW, HOVER_LIFT_SHADOW,
    HOVER_REST_TRANSFORM,
};
use site_core::RIPPLE_LIFETIME_MS;
use web_sys as web;

/// Element box as (top-left, size) in client coordinates.
#[inline]
fn client_box(el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

#[inline]
fn pointer_of(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_card_effects(ctx: &PageContext) -> anyhow::Result<Activation> {
    let cards = dom::query_all(&ctx.document, &ctx.config.cards);
    if cards.is_empty() {
        return Ok(Activation::Skipped("no cards"));
    }
    let tilt = !ctx.reduced_motion;
    for card in &cards {
        let el = card.clone();
        ctx.listen(card, "mouseenter", move |_: web::MouseEvent| {
            dom::set_style(&el, "box-shadow", HOVER_LIFT_SHADOW);
            if let Some(lift) = hover_enter_transform(tilt) {
                dom::set_style(&el, "transform", lift);
            }
        });
        let el = card.clone();
        ctx.listen(card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&el, "box-shadow", "");
            dom::set_style(&el, "transform", hover_leave_transform(tilt));
        });
        if tilt {
            let el = card.clone();
            ctx.listen(card, "mousemove", move |ev: web::MouseEvent| {
                let (origin, extent) = client_box(&el);
                let angles = tilt_angles(origin, extent, pointer_of(&ev));
                dom::set_style(&el, "transform", &tilt_transform(angles));
            });
        }
    }
    log::debug!("[pointer] card effects on {} cards (tilt={tilt})", cards.len());
    Ok(Activation::Active)
}

fn ensure_ripple_keyframes(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create style: {:?}", e))?;
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no document head"))?;
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("append style: {:?}", e))?;
    Ok(())
}

pub fn wire_button_ripples(ctx: &PageContext) -> anyhow::Result<Activation> {
    if ctx.reduced_motion {
        return Ok(Activation::Skipped("reduced motion"));
    }
    let buttons = dom::query_all(&ctx.document, &ctx.config.buttons);
    if buttons.is_empty() {
        return Ok(Activation::Skipped("no buttons"));
    }
    ensure_ripple_keyframes(&ctx.document)?;
    for button in &buttons {
        dom::set_style(button, "position", "relative");
        dom::set_style(button, "overflow", "hidden");
        let el = button.clone();
        let document = ctx.document.clone();
        ctx.listen(button, "click", move |ev: web::MouseEvent| {
            let (origin, extent) = client_box(&el);
            let ripple = ripple_geometry(origin, extent, pointer_of(&ev));
            let Ok(span) = document.create_element("span") else {
                return;
            };
            _ = span.set_attribute("style", &markup::ripple_style(&ripple));
            if el.append_child(&span).is_err() {
                return;
            }
            Timeout::new(RIPPLE_LIFETIME_MS, move || span.remove()).forget();
        });
    }
    Ok(Activation::Active)
}

/// Lift and enlarge buttons while hovered.
pub fn wire_button_morph(ctx: &PageContext) -> anyhow::Result<Activation> {
    if ctx.reduced_motion {
        return Ok(Activation::Skipped("reduced motion"));
    }
    let buttons = dom::query_all(&ctx.document, &ctx.config.buttons);
    if buttons.is_empty() {
        return Ok(Activation::Skipped("no buttons"));
    }
    for button in &buttons {
        let el = button.clone();
        ctx.listen(button, "mouseenter", move |_: web::MouseEvent| {
            dom::set_style(&el, "transform", BUTTON_MORPH_TRANSFORM);
            dom::set_style(&el, "box-shadow", BUTTON_MORPH_SHADOW);
        });
        let el = button.clone();
        ctx.listen(button, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&el, "transform", HOVER_REST_TRANSFORM);
            dom::set_style(&el, "box-shadow", BUTTON_REST_SHADOW);
        });
    }
    Ok(Activation::Active)
}
