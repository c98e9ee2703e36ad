//! One-shot reveal of elements entering the viewport.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Intersection report for one element, as delivered by the platform
/// observer or computed by [`intersection_ratio`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionReport {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug)]
pub struct RevealController {
    states: Vec<RevealState>,
    threshold: f64,
    bottom_margin_px: f64,
    revealed: usize,
}

impl RevealController {
    pub fn new(element_count: usize, threshold: f64, bottom_margin_px: f64) -> Self {
        Self {
            states: vec![RevealState::Pending; element_count],
            threshold: threshold.clamp(0.0, 1.0),
            bottom_margin_px,
            revealed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn bottom_margin_px(&self) -> f64 {
        self.bottom_margin_px
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Every tracked element has been revealed; observation can stop.
    pub fn is_complete(&self) -> bool {
        self.revealed == self.states.len()
    }

    /// Apply a report. Returns true only on the Pending -> Revealed transition,
    /// which is the caller's cue to add the class and stop observing.
    pub fn observe(&mut self, index: usize, report: IntersectionReport) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if *state == RevealState::Revealed {
            return false;
        }
        if !report.is_intersecting || report.ratio < self.threshold {
            return false;
        }
        *state = RevealState::Revealed;
        self.revealed += 1;
        if self.is_complete() {
            log::debug!("[reveal] all {} elements revealed", self.states.len());
        }
        true
    }

    /// `rootMargin` string for the platform observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px.round() as i64)
    }
}

/// Visible fraction of an element given its viewport-relative top and height.
/// A negative `bottom_margin_px` shrinks the viewport from below.
pub fn intersection_ratio(
    element_top: f64,
    element_height: f64,
    viewport_height: f64,
    bottom_margin_px: f64,
) -> IntersectionReport {
    let view_bottom = viewport_height + bottom_margin_px;
    let visible = (element_top + element_height).min(view_bottom) - element_top.max(0.0);
    if element_height <= 0.0 {
        let inside = element_top >= 0.0 && element_top <= view_bottom;
        return IntersectionReport {
            is_intersecting: inside,
            ratio: if inside { 1.0 } else { 0.0 },
        };
    }
    let ratio = (visible / element_height).clamp(0.0, 1.0);
    IntersectionReport {
        is_intersecting: visible > 0.0,
        ratio,
    }
}
