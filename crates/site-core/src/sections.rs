//! Active navigation tracking.
//!
//! Sections are scanned top to bottom and the last one whose start (minus the
//! lead-in offset) has been passed is current. The tracker owns the single
//! active link index, so two links can never be active at once.

use fnv::FnvHashMap;

/// Layout of one page section, read fresh on every sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }
}

/// Index of the current section: the last one in document order with
/// `scroll_top + lead_in >= offset_top`.
pub fn current_section(sections: &[Section], scroll_top: f64, lead_in: f64) -> Option<usize> {
    let line = scroll_top + lead_in;
    let mut current = None;
    for (i, s) in sections.iter().enumerate() {
        if line >= s.offset_top {
            current = Some(i);
        }
    }
    current
}

/// Section id an anchor points at, from `#id` or `page#id` hrefs.
pub fn anchor_target(href: &str) -> Option<&str> {
    let (_, id) = href.split_once('#')?;
    (!id.is_empty()).then_some(id)
}

/// Links to unmark and mark, applied in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveChange {
    pub deactivate: Option<usize>,
    pub activate: Option<usize>,
}

#[derive(Debug)]
pub struct SectionTracker {
    lead_in: f64,
    home_threshold: f64,
    home_link: Option<usize>,
    link_for_section: FnvHashMap<String, usize>,
    link_count: usize,
    active: Option<usize>,
}

impl SectionTracker {
    /// `link_targets` holds the section id each nav link points at, in
    /// document order. Links without a target keep their slot with `None`.
    pub fn new(
        link_targets: &[Option<String>],
        lead_in: f64,
        home_target: Option<&str>,
        home_threshold: f64,
    ) -> Self {
        let mut link_for_section = FnvHashMap::default();
        for (i, target) in link_targets.iter().enumerate() {
            if let Some(t) = target {
                // first link wins when several point at one section
                link_for_section.entry(t.clone()).or_insert(i);
            }
        }
        let home_link = home_target.and_then(|h| {
            link_targets
                .iter()
                .position(|t| t.as_deref() == Some(h))
        });
        log::debug!(
            "[nav] tracking {} links ({} distinct targets), home={:?}",
            link_targets.len(),
            link_for_section.len(),
            home_link
        );
        Self {
            lead_in,
            home_threshold,
            home_link,
            link_for_section,
            link_count: link_targets.len(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Link that should be active for this scroll position.
    pub fn resolve(&self, sections: &[Section], scroll_top: f64) -> Option<usize> {
        match current_section(sections, scroll_top, self.lead_in) {
            Some(i) => self.link_for_section.get(&sections[i].id).copied(),
            None if scroll_top < self.home_threshold => self.home_link,
            None => None,
        }
    }

    /// Re-evaluate for a new sample; `None` when the active link is unchanged.
    pub fn update(&mut self, sections: &[Section], scroll_top: f64) -> Option<ActiveChange> {
        if sections.is_empty() {
            return None;
        }
        let next = self.resolve(sections, scroll_top);
        if next == self.active {
            return None;
        }
        let change = ActiveChange {
            deactivate: self.active,
            activate: next,
        };
        self.active = next;
        Some(change)
    }

    /// Force a link active, e.g. right after it was clicked.
    pub fn select(&mut self, link: usize) -> Option<ActiveChange> {
        if link >= self.link_count || self.active == Some(link) {
            return None;
        }
        let change = ActiveChange {
            deactivate: self.active,
            activate: Some(link),
        };
        self.active = Some(link);
        Some(change)
    }
}
