// Host-side tests for the DOM hooks shared with the page templates.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::toast::{SubmitOutcome, ToastKind};
use site_core::SiteConfig;

#[test]
fn ids_are_plain_identifiers() {
    let ids = [PRELOADER_ID, DARK_MODE_TOGGLE_ID, PARTICLE_CANVAS_ID, CONTACT_FORM_ID];
    for id in ids.iter().chain(COUNTDOWN_UNIT_IDS.iter()) {
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "id {id:?}");
    }
}

#[test]
fn countdown_units_run_largest_first() {
    assert_eq!(COUNTDOWN_UNIT_IDS, ["days", "hours", "minutes", "seconds"]);
}

#[test]
fn class_hooks_are_bare_names() {
    for class in [
        DARK_MODE_CLASS,
        HIDE_CLASS,
        SCROLLED_CLASS,
        VISIBLE_CLASS,
        ACTIVE_CLASS,
        CELEBRATION_CLASS,
        MODAL_OVERLAY_CLASS,
        MODAL_CLOSE_CLASS,
        FOCUSED_CLASS,
    ] {
        assert!(!class.starts_with('.') && !class.contains(' '), "class {class:?}");
    }
    for selector in [
        TIME_UNIT_SELECTOR,
        FILTER_BUTTON_SELECTOR,
        FILTERABLE_CARD_SELECTOR,
        MODAL_CARD_SELECTOR,
        PROJECTS_GRID_SELECTOR,
        TOAST_CLOSE_SELECTOR,
    ] {
        assert!(selector.starts_with('.'), "selector {selector:?}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn feedback_timings_are_short() {
    assert!(TOGGLE_PRESS_MS > 0 && TOGGLE_PRESS_MS < 1_000);
    assert!(FILTER_FADE_IN_MS < FILTER_FADE_OUT_MS);
}

#[test]
fn progress_bar_style_starts_empty_and_on_top() {
    assert!(PROGRESS_BAR_STYLE.contains("width:0%"));
    assert!(PROGRESS_BAR_STYLE.contains("position:fixed"));
}

#[test]
fn motion_vars_and_query() {
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(MOTION_CSS_VARS.iter().all(|v| v.starts_with("--")));
}

#[test]
fn nav_toggle_id_matches_shared_ids_style() {
    for cfg in [SiteConfig::business(), SiteConfig::concert()] {
        assert!(!cfg.nav.toggle_id.contains('#'));
        assert!(!cfg.header.header_id.contains('#'));
    }
}

#[test]
fn image_selectors_match_their_attributes() {
    assert_eq!(LAZY_IMAGE_SELECTOR, format!("img[{LAZY_SOURCE_ATTR}]"));
    assert!(PRELOAD_IMAGE_SELECTOR.starts_with("img["));
    assert!(FORM_FIELD_SELECTOR.split(',').all(|s| s.trim().starts_with("form ")));
}

#[test]
fn invalid_form_ends_in_an_error_toast() {
    let (kind, message) = SubmitOutcome::Failed(INVALID_FORM_REASON.into()).toast();
    assert_eq!(kind, ToastKind::Error);
    assert!(!message.is_empty());
    assert!(!INVALID_FORM_REASON.is_empty());
}
