use crate::telemetry::ScrollSample;

/// Bar width in whole percent for a sample, always within [0, 100].
#[inline]
pub fn progress_percent(sample: &ScrollSample) -> u32 {
    let pct = (sample.fraction() * 100.0).round();
    if pct.is_finite() {
        pct.clamp(0.0, 100.0) as u32
    } else {
        0
    }
}

/// CSS width value for a percentage.
#[inline]
pub fn width_style(percent: u32) -> String {
    format!("{}%", percent.min(100))
}

/// Scroll progress bar state. Remembers the last width it reported so the
/// DOM is only written when the rendered value changes.
#[derive(Debug, Default)]
pub struct ProgressIndicator {
    last_width: Option<u32>,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_width(&self) -> Option<u32> {
        self.last_width
    }

    /// Returns the new width when it differs from the one last rendered.
    pub fn update(&mut self, sample: &ScrollSample) -> Option<u32> {
        let width = progress_percent(sample);
        if self.last_width == Some(width) {
            return None;
        }
        self.last_width = Some(width);
        Some(width)
    }
}
