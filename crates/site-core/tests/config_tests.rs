// Host-side tests for page presets and config validation.

use site_core::*;
use std::time::Duration;

#[test]
fn presets_validate() {
    assert_eq!(SiteConfig::business().validate(), Ok(()));
    assert_eq!(SiteConfig::concert().validate(), Ok(()));
    assert_eq!(SiteConfig::default(), SiteConfig::business());
}

#[test]
fn presets_differ_where_the_pages_differ() {
    let b = SiteConfig::business();
    let c = SiteConfig::concert();
    assert_eq!(b.nav.lead_in_px, 120.0);
    assert_eq!(c.nav.lead_in_px, 100.0);
    assert!(c.throttle < b.throttle);
    assert!(b.countdown.is_none());
    assert!(c.countdown.is_some());
    assert_eq!(c.nav.home_target.as_deref(), Some("home"));
    // fields left to the shared defaults
    assert_eq!(b.header.back_to_top_after_px, c.header.back_to_top_after_px);
    assert_eq!(b.reveal.threshold, c.reveal.threshold);
    assert_eq!(b.reveal.selector(), ".service-card, .project-card, .team-member, .testimonial");
}

#[test]
fn page_kind_from_body_attribute() {
    assert_eq!(PageKind::from_attr(Some("concert")), PageKind::Concert);
    assert_eq!(PageKind::from_attr(Some(" Concert ")), PageKind::Concert);
    assert_eq!(PageKind::from_attr(Some("agency")), PageKind::Business);
    assert_eq!(PageKind::from_attr(None), PageKind::Business);
    assert_eq!(SiteConfig::for_page(PageKind::Concert).page, PageKind::Concert);
}

#[test]
fn validate_rejects_bad_values() {
    let mut cfg = SiteConfig::business();
    cfg.reveal.threshold = 1.5;
    assert_eq!(cfg.validate(), Err(ConfigError::RevealThreshold(1.5)));

    let mut cfg = SiteConfig::business();
    cfg.nav.lead_in_px = -10.0;
    assert_eq!(cfg.validate(), Err(ConfigError::LeadIn(-10.0)));

    let mut cfg = SiteConfig::business();
    cfg.throttle = Duration::from_secs(5);
    assert_eq!(cfg.validate(), Err(ConfigError::ThrottleInterval(5_000)));

    let mut cfg = SiteConfig::business();
    cfg.nav.links = "  ".to_string();
    assert_eq!(cfg.validate(), Err(ConfigError::EmptySelector("nav links")));

    let mut cfg = SiteConfig::business();
    cfg.carousel = Some(CarouselConfig {
        items_per_slide: 0,
        autoplay_ms: 1000,
    });
    assert_eq!(cfg.validate(), Err(ConfigError::CarouselSlideSize));

    let mut cfg = SiteConfig::concert();
    if let Some(t) = cfg.countdown.as_mut() {
        t.month = 13;
    }
    assert!(matches!(cfg.validate(), Err(ConfigError::CountdownTarget(_))));
}

#[test]
fn config_errors_render_readably() {
    let msg = ConfigError::RevealThreshold(2.0).to_string();
    assert!(msg.contains("[0, 1]"));
    assert_eq!(ConfigError::EmptySelector("sections").to_string(), "sections selector is empty");
}
