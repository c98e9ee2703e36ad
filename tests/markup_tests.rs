// Host-side tests for the markup the front-end injects into the page.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use markup::*;
use site_core::interact::ripple_geometry;
use site_core::toast::{SubmitOutcome, ToastKind};
use glam::Vec2;

#[test]
fn toast_markup_escapes_the_message() {
    let html = toast_html(ToastKind::Error, "<b>oops</b> & co");
    assert!(html.contains("&lt;b&gt;oops&lt;/b&gt; &amp; co"));
    assert!(html.contains("notification-close"));
    assert!(html.contains(ToastKind::Error.icon()));
    assert!(!html.contains("<b>"));
}

#[test]
fn toast_style_uses_kind_colour_and_starts_off_screen() {
    let (kind, _) = SubmitOutcome::Sent.toast();
    let style = toast_style(kind);
    assert!(style.contains("background:#10b981"));
    assert!(style.contains("translateX(400px)"));
    assert!(toast_style(ToastKind::Error).contains("#ef4444"));
}

#[test]
fn modal_body_lists_tags_and_skips_missing_image() {
    let html = modal_body_html("Site \"Nova\"", None, "Refonte complète", "React, Node ,,MongoDB");
    assert!(!html.contains("<img"));
    assert!(html.contains("<h2>Site &quot;Nova&quot;</h2>"));
    assert_eq!(html.matches("<span class=\"tag\">").count(), 3);
    assert!(html.contains(">Node<"));

    let with_image = modal_body_html("Nova", Some("img/nova.jpg"), MODAL_FALLBACK_DESCRIPTION, "");
    assert!(with_image.starts_with("<img src=\"img/nova.jpg\" alt=\"Nova\">"));
    assert!(!with_image.contains("modal-tags"));
}

#[test]
fn modal_shell_has_close_and_body_hooks() {
    assert!(MODAL_SHELL_HTML.contains("class=\"modal-close\""));
    assert!(MODAL_SHELL_HTML.contains("class=\"modal-body\""));
    assert_eq!(MODAL_BODY_SELECTOR, ".modal-body");
}

#[test]
fn ripple_style_places_the_span() {
    let r = ripple_geometry(
        Vec2::new(10.0, 20.0),
        Vec2::new(120.0, 40.0),
        Vec2::new(70.0, 40.0),
    );
    let style = ripple_style(&r);
    assert!(style.contains("width:120.0px"));
    assert!(style.contains("height:120.0px"));
    assert!(style.contains("left:0.0px"));
    assert!(style.contains("top:-40.0px"));
    assert!(RIPPLE_KEYFRAMES.starts_with("@keyframes ripple"));
    assert!(RIPPLE_KEYFRAMES.contains("scale(2)"));
}

#[test]
fn carousel_dots_sit_inside_the_container_after_the_buttons() {
    let classes: Vec<&str> = CAROUSEL_PARTS.iter().map(|&(_, class)| class).collect();
    assert_eq!(
        classes,
        [
            "carousel-track",
            "carousel-btn carousel-prev",
            "carousel-btn carousel-next",
            "carousel-dots",
        ]
    );
    assert_eq!(CAROUSEL_PARTS[1].0, "button");
    assert_eq!(CAROUSEL_PARTS[2].0, "button");
    assert_eq!(CAROUSEL_CONTAINER_CLASS, "carousel-container");
}

#[test]
fn skip_link_is_parked_until_focused() {
    assert_eq!(SKIP_LINK_HREF, "#main");
    assert_eq!(SKIP_LINK_TEXT, "Aller au contenu principal");
    assert_eq!(SKIP_LINK_CLASS, "skip-link");
    assert!(SKIP_LINK_STYLE.starts_with("position:absolute;top:-40px;left:6px;"));
    assert!(SKIP_LINK_STYLE.contains("background:var(--primary)"));
    assert!(SKIP_LINK_STYLE.contains("z-index:1000"));
    assert!(SKIP_LINK_STYLE.contains("transition:top 0.3s"));
    assert_eq!(skip_link_top(true), "6px");
    assert_eq!(skip_link_top(false), "-40px");
}

#[test]
fn transforms_format_offsets() {
    assert_eq!(translate_x_percent(-50.0), "translateX(-50.000%)");
    assert_eq!(translate_x_percent(-100.0 / 3.0), "translateX(-33.333%)");
    assert_eq!(translate_y_px(125.34), "translateY(125.3px)");
}

#[test]
fn class_of_selector_accepts_only_plain_class_selectors() {
    assert_eq!(class_of_selector(".scroll-progress"), Some("scroll-progress"));
    assert_eq!(class_of_selector(" .scroll-progress-bar "), Some("scroll-progress-bar"));
    assert_eq!(class_of_selector("#progress"), None);
    assert_eq!(class_of_selector(".a .b"), None);
    assert_eq!(class_of_selector("."), None);
}
