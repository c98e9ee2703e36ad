// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use keys::*;

#[test]
fn escape_dismisses() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Dismiss));
    assert_eq!(action_for_key("Esc"), Some(KeyAction::Dismiss));
}

#[test]
fn arrows_page_the_carousel() {
    assert_eq!(action_for_key("ArrowLeft"), Some(KeyAction::PrevSlide));
    assert_eq!(action_for_key("ArrowRight"), Some(KeyAction::NextSlide));
    assert_eq!(action_for_key("Left"), Some(KeyAction::PrevSlide));
    assert_eq!(action_for_key("Right"), Some(KeyAction::NextSlide));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["Enter", " ", "a", "ArrowUp", "escape", ""] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn only_tab_enters_keyboard_navigation() {
    assert!(enters_keyboard_nav("Tab"));
    for key in ["Escape", "Enter", "ArrowLeft", "tab", ""] {
        assert!(!enters_keyboard_nav(key), "key {key:?}");
    }
    assert_eq!(KEYBOARD_NAV_CLASS, "keyboard-nav");
}
