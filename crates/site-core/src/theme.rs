/// The single persisted preference: dark mode on or off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub dark: bool,
}

impl ThemePreference {
    /// Interpret a stored value. Anything other than `true` means light.
    pub fn from_stored(stored: Option<bool>) -> Self {
        Self {
            dark: stored.unwrap_or(false),
        }
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    /// Icon shown on the toggle: the mode a click would switch to.
    pub fn toggle_icon(self) -> &'static str {
        if self.dark {
            "☀️"
        } else {
            "🌙"
        }
    }
}
