//! Page configuration.
//!
//! The business and concert pages run the same components with slightly
//! different offsets, thresholds and markup. Each difference is a field here
//! rather than a constant baked into a component.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Business,
    Concert,
}

impl PageKind {
    /// Map `<body data-site="...">`; anything unknown is the business page.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("concert") => PageKind::Concert,
            _ => PageKind::Business,
        }
    }
}

/// Wall-clock date and time in the visitor's local zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalDateTime {
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub bottom_margin_px: f64,
    /// Class added up front so CSS can hide elements until revealed.
    pub ready_class: Option<String>,
    pub revealed_class: String,
}

impl RevealConfig {
    /// Comma-joined selector list for `querySelectorAll`.
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub sections: String,
    pub links: String,
    pub active_class: String,
    pub lead_in_px: f64,
    /// Section id of the link shown active above the first section.
    pub home_target: Option<String>,
    pub home_threshold_px: f64,
    /// Mobile drawer: menu element selector, toggle button id, open class.
    pub menu: String,
    pub toggle_id: String,
    pub open_class: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderConfig {
    pub header_id: String,
    pub scrolled_after_px: f64,
    pub hide_after_px: f64,
    pub back_to_top_id: String,
    pub back_to_top_after_px: f64,
    pub smooth_scroll_gap_px: f64,
    pub parallax: String,
    pub parallax_speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    pub items_per_slide: usize,
    pub autoplay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub page: PageKind,
    pub throttle: Duration,
    pub progress_bar: String,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub header: HeaderConfig,
    pub cards: String,
    pub buttons: String,
    pub particle_count: usize,
    pub countdown: Option<LocalDateTime>,
    pub carousel: Option<CarouselConfig>,
    pub preloader_delay_ms: Option<u32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::business()
    }
}

impl SiteConfig {
    pub fn for_page(page: PageKind) -> Self {
        match page {
            PageKind::Business => Self::business(),
            PageKind::Concert => Self::concert(),
        }
    }

    pub fn business() -> Self {
        Self {
            page: PageKind::Business,
            throttle: Duration::from_millis(DEFAULT_THROTTLE_MS),
            progress_bar: ".scroll-progress".to_string(),
            nav: NavConfig {
                sections: "main section[id]".to_string(),
                links: ".nav-links a".to_string(),
                active_class: "active".to_string(),
                lead_in_px: DEFAULT_LEAD_IN_PX,
                home_target: None,
                home_threshold_px: DEFAULT_HOME_THRESHOLD_PX,
                menu: ".nav-links".to_string(),
                toggle_id: "navToggle".to_string(),
                open_class: "open".to_string(),
            },
            reveal: RevealConfig {
                selectors: vec![
                    ".service-card".to_string(),
                    ".project-card".to_string(),
                    ".team-member".to_string(),
                    ".testimonial".to_string(),
                ],
                threshold: DEFAULT_REVEAL_THRESHOLD,
                bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
                ready_class: Some("animate-ready".to_string()),
                revealed_class: "animate-in".to_string(),
            },
            header: HeaderConfig {
                header_id: "header".to_string(),
                scrolled_after_px: HEADER_SCROLLED_AFTER_PX,
                hide_after_px: HEADER_HIDE_AFTER_PX,
                back_to_top_id: "backToTop".to_string(),
                back_to_top_after_px: BACK_TO_TOP_AFTER_PX,
                smooth_scroll_gap_px: SMOOTH_SCROLL_GAP_PX,
                parallax: ".hero-bg, .mission-bg".to_string(),
                parallax_speed: DEFAULT_PARALLAX_SPEED,
            },
            cards: ".service-card, .project-card, .team-member".to_string(),
            buttons: ".btn".to_string(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            countdown: None,
            carousel: Some(CarouselConfig {
                items_per_slide: CAROUSEL_ITEMS_PER_SLIDE,
                autoplay_ms: CAROUSEL_AUTOPLAY_MS,
            }),
            preloader_delay_ms: Some(1_000),
        }
    }

    pub fn concert() -> Self {
        let base = Self::business();
        Self {
            page: PageKind::Concert,
            throttle: Duration::from_millis(10),
            progress_bar: ".scroll-progress-bar".to_string(),
            nav: NavConfig {
                sections: "section[id]".to_string(),
                links: ".nav-link".to_string(),
                lead_in_px: 100.0,
                home_target: Some("home".to_string()),
                menu: "#navMenu".to_string(),
                open_class: "active".to_string(),
                ..base.nav
            },
            reveal: RevealConfig {
                selectors: vec![".animate-on-scroll".to_string()],
                ready_class: None,
                revealed_class: "animated".to_string(),
                ..base.reveal
            },
            header: HeaderConfig {
                parallax: ".hero-bg".to_string(),
                ..base.header
            },
            particle_count: 50,
            countdown: Some(LocalDateTime {
                year: 2025,
                month: 11,
                day: 22,
                hour: 20,
                minute: 0,
                second: 0,
            }),
            carousel: None,
            preloader_delay_ms: None,
            ..base
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.throttle > Duration::from_secs(1) {
            return Err(ConfigError::ThrottleInterval(self.throttle.as_millis()));
        }
        if !self.nav.lead_in_px.is_finite() || self.nav.lead_in_px < 0.0 {
            return Err(ConfigError::LeadIn(self.nav.lead_in_px));
        }
        if !self.nav.home_threshold_px.is_finite() || self.nav.home_threshold_px < 0.0 {
            return Err(ConfigError::HomeThreshold(self.nav.home_threshold_px));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal.threshold));
        }
        if !self.reveal.bottom_margin_px.is_finite() {
            return Err(ConfigError::RevealMargin(self.reveal.bottom_margin_px));
        }
        for (name, sel) in [
            ("progress bar", &self.progress_bar),
            ("sections", &self.nav.sections),
            ("nav links", &self.nav.links),
            ("reveal class", &self.reveal.revealed_class),
        ] {
            if sel.trim().is_empty() {
                return Err(ConfigError::EmptySelector(name));
            }
        }
        if self.reveal.selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptySelector("revealable"));
        }
        if let Some(c) = self.carousel {
            if c.items_per_slide == 0 {
                return Err(ConfigError::CarouselSlideSize);
            }
        }
        if let Some(t) = self.countdown {
            if !t.is_valid() {
                return Err(ConfigError::CountdownTarget(t));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("throttle interval {0}ms exceeds one second")]
    ThrottleInterval(u128),
    #[error("lead-in offset must be a non-negative pixel value, got {0}")]
    LeadIn(f64),
    #[error("home threshold must be a non-negative pixel value, got {0}")]
    HomeThreshold(f64),
    #[error("reveal threshold must be within [0, 1], got {0}")]
    RevealThreshold(f64),
    #[error("reveal margin must be finite, got {0}")]
    RevealMargin(f64),
    #[error("{0} selector is empty")]
    EmptySelector(&'static str),
    #[error("carousel needs at least one item per slide")]
    CarouselSlideSize,
    #[error("countdown target {0:?} is not a valid date and time")]
    CountdownTarget(LocalDateTime),
}
