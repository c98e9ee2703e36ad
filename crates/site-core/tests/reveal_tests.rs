// Host-side tests for one-shot reveal.

use site_core::*;

fn visible(ratio: f64) -> IntersectionReport {
    IntersectionReport {
        is_intersecting: ratio > 0.0,
        ratio,
    }
}

#[test]
fn reveals_once_threshold_is_crossed() {
    let mut rc = RevealController::new(2, 0.1, -50.0);
    assert!(!rc.observe(0, visible(0.05)));
    assert_eq!(rc.state(0), Some(RevealState::Pending));
    assert!(rc.observe(0, visible(0.1)));
    assert_eq!(rc.state(0), Some(RevealState::Revealed));
    assert_eq!(rc.state(1), Some(RevealState::Pending));
    assert_eq!(rc.revealed_count(), 1);
}

#[test]
fn transition_fires_only_once() {
    let mut rc = RevealController::new(1, 0.1, 0.0);
    assert!(rc.observe(0, visible(0.5)));
    assert!(!rc.observe(0, visible(1.0)));
    assert_eq!(rc.revealed_count(), 1);
}

#[test]
fn revealed_never_reverts_when_scrolled_away_and_back() {
    let mut rc = RevealController::new(1, 0.1, -50.0);
    let viewport = 800.0;
    let height = 300.0;
    // element sits at document y = 1500; sweep the page down, up and down again
    let path: Vec<f64> = (0..=40)
        .map(|i| i as f64 * 50.0)
        .chain((0..=40).rev().map(|i| i as f64 * 50.0))
        .chain((0..=40).map(|i| i as f64 * 50.0))
        .collect();
    let mut ever_revealed = false;
    for scroll_top in path {
        let report = intersection_ratio(1500.0 - scroll_top, height, viewport, -50.0);
        rc.observe(0, report);
        let state = rc.state(0);
        if ever_revealed {
            assert_eq!(state, Some(RevealState::Revealed), "reverted at {scroll_top}");
        }
        ever_revealed |= state == Some(RevealState::Revealed);
    }
    assert!(ever_revealed);
}

#[test]
fn not_intersecting_report_is_ignored_even_with_ratio() {
    let mut rc = RevealController::new(1, 0.0, 0.0);
    let report = IntersectionReport {
        is_intersecting: false,
        ratio: 0.0,
    };
    assert!(!rc.observe(0, report));
    assert!(rc.observe(0, visible(0.01)));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut rc = RevealController::new(1, 0.1, 0.0);
    assert!(!rc.observe(3, visible(1.0)));
    assert_eq!(rc.state(3), None);
}

#[test]
fn completes_when_all_revealed() {
    let mut rc = RevealController::new(3, 0.1, 0.0);
    assert!(!rc.is_complete());
    for i in 0..3 {
        rc.observe(i, visible(0.9));
    }
    assert!(rc.is_complete());
    assert!(RevealController::new(0, 0.1, 0.0).is_complete());
}

#[test]
fn root_margin_formats_bottom_inset() {
    assert_eq!(RevealController::new(0, 0.1, -50.0).root_margin(), "0px 0px -50px 0px");
    assert_eq!(RevealController::new(0, 0.1, 0.0).root_margin(), "0px 0px 0px 0px");
}

#[test]
fn intersection_ratio_respects_bottom_margin() {
    // element top exactly at the viewport bottom: not visible
    let r = intersection_ratio(800.0, 100.0, 800.0, 0.0);
    assert!(!r.is_intersecting);
    // 40px into view, but the -50px margin hides it
    let r = intersection_ratio(760.0, 100.0, 800.0, -50.0);
    assert!(!r.is_intersecting);
    let r = intersection_ratio(700.0, 100.0, 800.0, -50.0);
    assert!(r.is_intersecting);
    assert!((r.ratio - 0.5).abs() < 1e-9);
    // fully inside
    let r = intersection_ratio(100.0, 100.0, 800.0, -50.0);
    assert_eq!(r.ratio, 1.0);
    // scrolled past the top
    let r = intersection_ratio(-150.0, 100.0, 800.0, 0.0);
    assert!(!r.is_intersecting);
}
