// Pure key mapping shared by the keyboard wiring and host tests.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Close the mobile drawer and the project modal.
    Dismiss,
    PrevSlide,
    NextSlide,
}

/// Body class marking keyboard navigation, so focus rings only show then.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

/// Whether a keydown switches the page into keyboard navigation.
#[inline]
pub fn enters_keyboard_nav(key: &str) -> bool {
    key == "Tab"
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" => Some(KeyAction::Dismiss),
        "ArrowLeft" | "Left" => Some(KeyAction::PrevSlide),
        "ArrowRight" | "Right" => Some(KeyAction::NextSlide),
        _ => None,
    }
}
