//! Scroll-driven chrome: sticky header, back-to-top button, parallax.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Past the "scrolled" threshold; the header takes its compact look.
    pub scrolled: bool,
    /// Slid out of view while the user scrolls down.
    pub hidden: bool,
}

#[derive(Debug)]
pub struct StickyHeader {
    scrolled_after: f64,
    hide_after: f64,
    last_scroll_y: f64,
    state: HeaderState,
}

impl StickyHeader {
    pub fn new(scrolled_after: f64, hide_after: f64) -> Self {
        Self {
            scrolled_after,
            hide_after,
            last_scroll_y: 0.0,
            state: HeaderState::default(),
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Returns the new state when it differs from the previous one.
    pub fn update(&mut self, scroll_y: f64) -> Option<HeaderState> {
        let next = HeaderState {
            scrolled: scroll_y > self.scrolled_after,
            hidden: scroll_y > self.last_scroll_y && scroll_y > self.hide_after,
        };
        self.last_scroll_y = scroll_y;
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical translation for a parallax layer.
#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Parse a `data-speed` attribute, falling back to `default` when absent or
/// malformed.
pub fn parse_speed(attr: Option<&str>, default: f64) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Where a smooth-scroll to an anchor should land.
#[inline]
pub fn anchor_scroll_target(target_offset_top: f64, header_height: f64, gap: f64) -> f64 {
    (target_offset_top - header_height - gap).max(0.0)
}
