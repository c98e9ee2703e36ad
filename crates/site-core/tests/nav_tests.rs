// Host-side tests for section tracking and active nav links.

use site_core::*;

fn page_sections() -> Vec<Section> {
    vec![
        Section::new("services", 0.0, 500.0),
        Section::new("projects", 500.0, 700.0),
        Section::new("contact", 1200.0, 600.0),
    ]
}

fn targets(ids: &[&str]) -> Vec<Option<String>> {
    ids.iter().map(|s| Some(s.to_string())).collect()
}

/// Apply a change the way the DOM wiring does: unmark, then mark.
fn apply(flags: &mut [bool], change: ActiveChange) {
    if let Some(i) = change.deactivate {
        flags[i] = false;
    }
    if let Some(i) = change.activate {
        flags[i] = true;
    }
}

#[test]
fn current_section_is_last_passed() {
    let sections = page_sections();
    assert_eq!(current_section(&sections, 0.0, 120.0), Some(0));
    assert_eq!(current_section(&sections, 400.0, 120.0), Some(1));
    assert_eq!(current_section(&sections, 379.0, 120.0), Some(0));
    assert_eq!(current_section(&sections, 380.0, 120.0), Some(1));
    assert_eq!(current_section(&sections, 1080.0, 120.0), Some(2));
    assert_eq!(current_section(&sections, 50_000.0, 120.0), Some(2));
}

#[test]
fn current_section_none_above_first_section() {
    let sections = vec![Section::new("about", 300.0, 400.0), Section::new("team", 800.0, 400.0)];
    assert_eq!(current_section(&sections, 0.0, 120.0), None);
    assert_eq!(current_section(&sections, 180.0, 120.0), Some(0));
    assert_eq!(current_section(&[], 500.0, 120.0), None);
}

#[test]
fn overlapping_offsets_resolve_to_later_section() {
    let sections = vec![
        Section::new("a", 0.0, 100.0),
        Section::new("b", 400.0, 100.0),
        Section::new("c", 400.0, 100.0),
    ];
    assert_eq!(current_section(&sections, 300.0, 120.0), Some(2));
}

#[test]
fn tracker_activates_matching_links() {
    let sections = page_sections();
    let links = targets(&["services", "projects", "contact"]);
    let mut tracker = SectionTracker::new(&links, 120.0, None, 100.0);
    assert_eq!(
        tracker.update(&sections, 0.0),
        Some(ActiveChange { deactivate: None, activate: Some(0) })
    );
    assert_eq!(
        tracker.update(&sections, 400.0),
        Some(ActiveChange { deactivate: Some(0), activate: Some(1) })
    );
    assert_eq!(tracker.update(&sections, 450.0), None);
    assert_eq!(
        tracker.update(&sections, 1080.0),
        Some(ActiveChange { deactivate: Some(1), activate: Some(2) })
    );
    assert_eq!(tracker.active(), Some(2));
}

#[test]
fn home_link_shows_above_first_section() {
    let sections = vec![Section::new("about", 300.0, 400.0), Section::new("team", 800.0, 400.0)];
    let links = targets(&["home", "about", "team"]);
    let mut tracker = SectionTracker::new(&links, 120.0, Some("home"), 100.0);
    assert_eq!(tracker.resolve(&sections, 0.0), Some(0));
    assert_eq!(tracker.update(&sections, 0.0).and_then(|c| c.activate), Some(0));
    // past the home threshold but before "about" starts: nothing active
    assert_eq!(
        tracker.update(&sections, 150.0),
        Some(ActiveChange { deactivate: Some(0), activate: None })
    );
    assert_eq!(tracker.update(&sections, 200.0).and_then(|c| c.activate), Some(1));
}

#[test]
fn no_home_link_means_nothing_active_at_top() {
    let sections = vec![Section::new("about", 300.0, 400.0)];
    let mut tracker = SectionTracker::new(&targets(&["about"]), 120.0, None, 100.0);
    assert_eq!(tracker.update(&sections, 0.0), None);
    assert_eq!(tracker.active(), None);
}

#[test]
fn zero_sections_is_a_no_op() {
    let mut tracker = SectionTracker::new(&targets(&["home"]), 120.0, Some("home"), 100.0);
    assert_eq!(tracker.update(&[], 0.0), None);
    assert_eq!(tracker.update(&[], 900.0), None);
    assert_eq!(tracker.active(), None);
}

#[test]
fn duplicate_links_mark_only_the_first() {
    let sections = page_sections();
    let links = targets(&["services", "projects", "projects", "contact"]);
    let mut tracker = SectionTracker::new(&links, 120.0, None, 100.0);
    assert_eq!(tracker.update(&sections, 500.0).and_then(|c| c.activate), Some(1));
}

#[test]
fn links_without_targets_are_never_marked() {
    let sections = page_sections();
    let links = vec![None, Some("services".to_string()), None];
    let mut tracker = SectionTracker::new(&links, 120.0, None, 100.0);
    assert_eq!(tracker.update(&sections, 0.0).and_then(|c| c.activate), Some(1));
    assert_eq!(
        tracker.update(&sections, 2000.0),
        Some(ActiveChange { deactivate: Some(1), activate: None })
    );
}

#[test]
fn at_most_one_link_active_across_sweep() {
    let sections = vec![
        Section::new("home", 0.0, 700.0),
        Section::new("services", 700.0, 900.0),
        Section::new("projects", 1500.0, 800.0),
        Section::new("team", 2300.0, 700.0),
        Section::new("contact", 3000.0, 1100.0),
    ];
    let links = targets(&["home", "services", "projects", "team", "contact"]);
    let mut tracker = SectionTracker::new(&links, 120.0, Some("home"), 100.0);
    let mut flags = vec![false; links.len()];
    let max_scroll = 4100.0 - 900.0;
    let mut visited = Vec::new();
    for step in 0..50 {
        let scroll_top = max_scroll * step as f64 / 49.0;
        if let Some(change) = tracker.update(&sections, scroll_top) {
            apply(&mut flags, change);
        }
        let active = flags.iter().filter(|f| **f).count();
        assert!(active <= 1, "{active} links active at {scroll_top}");
        if let Some(i) = tracker.active() {
            assert!(flags[i]);
            if visited.last() != Some(&i) {
                visited.push(i);
            }
        }
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
}

#[test]
fn select_moves_the_active_marker() {
    let mut tracker = SectionTracker::new(&targets(&["a", "b"]), 100.0, None, 100.0);
    assert_eq!(tracker.select(1), Some(ActiveChange { deactivate: None, activate: Some(1) }));
    assert_eq!(tracker.select(1), None);
    assert_eq!(tracker.select(7), None);
    assert_eq!(tracker.select(0), Some(ActiveChange { deactivate: Some(1), activate: Some(0) }));
}

#[test]
fn anchor_target_parses_hrefs() {
    assert_eq!(anchor_target("#contact"), Some("contact"));
    assert_eq!(anchor_target("/index.html#team"), Some("team"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/about"), None);
}
