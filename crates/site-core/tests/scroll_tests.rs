// Host-side tests for scroll sampling, throttling and the progress bar.

use instant::Instant;
use site_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

#[test]
fn progress_width_matches_rounded_fraction() {
    let viewport = 800.0;
    let document = 2800.0;
    let range = document - viewport;
    for scroll_top in (0..=2000).step_by(7) {
        let f = scroll_top as f64 / range;
        let sample = ScrollSample::new(scroll_top as f64, viewport, document);
        let expected = (f * 100.0).round() as u32;
        assert_eq!(progress_percent(&sample), expected, "scroll_top {scroll_top}");
        assert!(progress_percent(&sample) <= 100);
    }
}

#[test]
fn progress_is_zero_at_top_and_full_at_bottom() {
    let top = ScrollSample::new(0.0, 900.0, 3000.0);
    let bottom = ScrollSample::new(2100.0, 900.0, 3000.0);
    assert_eq!(progress_percent(&top), 0);
    assert_eq!(progress_percent(&bottom), 100);
}

#[test]
fn progress_clamps_overscroll() {
    // rubber-band scrolling can report positions past either end
    let past_bottom = ScrollSample::new(5000.0, 900.0, 3000.0);
    let above_top = ScrollSample::new(-40.0, 900.0, 3000.0);
    assert_eq!(progress_percent(&past_bottom), 100);
    assert_eq!(progress_percent(&above_top), 0);
}

#[test]
fn progress_is_zero_when_page_fits_viewport() {
    for scroll_top in [0.0, 1.0, 250.0, 10_000.0] {
        let sample = ScrollSample::new(scroll_top, 1000.0, 1000.0);
        assert_eq!(sample.fraction(), 0.0);
        assert_eq!(progress_percent(&sample), 0);
    }
    let shorter = ScrollSample::new(30.0, 1000.0, 600.0);
    assert_eq!(progress_percent(&shorter), 0);
}

#[test]
fn progress_handles_non_finite_input() {
    let nan = ScrollSample::new(f64::NAN, 800.0, 2000.0);
    let inf_doc = ScrollSample::new(100.0, 800.0, f64::INFINITY);
    assert_eq!(progress_percent(&nan), 0);
    assert_eq!(progress_percent(&inf_doc), 0);
}

#[test]
fn progress_indicator_skips_redundant_writes() {
    let mut bar = ProgressIndicator::new();
    let s = ScrollSample::new(500.0, 500.0, 1500.0);
    assert_eq!(bar.update(&s), Some(50));
    assert_eq!(bar.update(&s), None);
    // 501/1000 still rounds to 50%
    assert_eq!(bar.update(&ScrollSample::new(501.0, 500.0, 1500.0)), None);
    assert_eq!(bar.update(&ScrollSample::new(1000.0, 500.0, 1500.0)), Some(100));
    assert_eq!(bar.last_width(), Some(100));
    assert_eq!(width_style(100), "100%");
}

#[test]
fn throttle_runs_first_call_and_defers_the_rest() {
    let t0 = Instant::now();
    let mut th = Throttle::new(Duration::from_millis(50));
    assert_eq!(th.offer(t0, 1), ThrottleAction::Run(1));
    assert_eq!(
        th.offer(at(t0, 10), 2),
        ThrottleAction::Defer(Duration::from_millis(40))
    );
    assert_eq!(th.offer(at(t0, 20), 3), ThrottleAction::Coalesced);
    assert!(th.has_pending());
    // trailing call carries the newest value
    assert_eq!(th.flush(at(t0, 50)), Some(3));
    assert_eq!(th.flush(at(t0, 51)), None);
}

#[test]
fn throttle_runs_immediately_once_interval_elapsed() {
    let t0 = Instant::now();
    let mut th = Throttle::new(Duration::from_millis(50));
    assert_eq!(th.offer(t0, "a"), ThrottleAction::Run("a"));
    assert_eq!(th.offer(at(t0, 51), "b"), ThrottleAction::Run("b"));
}

#[test]
fn throttle_drops_stale_trailing_value_when_timer_is_late() {
    let t0 = Instant::now();
    let mut th = Throttle::new(Duration::from_millis(50));
    th.offer(t0, 1);
    assert!(matches!(th.offer(at(t0, 10), 2), ThrottleAction::Defer(_)));
    // timer did not fire in time; a fresh notification supersedes it
    assert_eq!(th.offer(at(t0, 120), 3), ThrottleAction::Run(3));
    assert_eq!(th.flush(at(t0, 121)), None);
}

/// Drive the telemetry the way the browser would: one notification per ms,
/// with the trailing timer firing before any notification at its deadline.
#[test]
fn throttle_bounds_runs_and_keeps_last_sample() {
    let t0 = Instant::now();
    let interval_ms = 50u64;
    let duration_ms = 200u64;
    let seen = Rc::new(RefCell::new(Vec::<f64>::new()));
    let mut telemetry = ScrollTelemetry::new(Duration::from_millis(interval_ms));
    let sink = seen.clone();
    telemetry.subscribe(move |s| sink.borrow_mut().push(s.scroll_top));

    let mut deadline: Option<u64> = None;
    let mut last_sent = 0.0;
    for ms in 0..duration_ms {
        if let Some(d) = deadline {
            if d <= ms {
                telemetry.flush(at(t0, d));
                deadline = None;
            }
        }
        last_sent = ms as f64;
        let sample = ScrollSample::new(last_sent, 800.0, 5000.0);
        if let Some(delay) = telemetry.notify(at(t0, ms), sample) {
            deadline = Some(ms + delay.as_millis() as u64);
        }
    }
    if let Some(d) = deadline {
        telemetry.flush(at(t0, d));
    }

    let seen = seen.borrow();
    let max_runs = duration_ms.div_ceil(interval_ms) as usize + 1;
    assert!(
        seen.len() <= max_runs,
        "handler ran {} times, limit {}",
        seen.len(),
        max_runs
    );
    assert_eq!(seen.last().copied(), Some(last_sent));
    assert_eq!(telemetry.latest().map(|s| s.scroll_top), Some(last_sent));
    // samples are never reordered
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn telemetry_delivers_to_every_subscriber_in_order() {
    let log = Rc::new(RefCell::new(Vec::<&'static str>::new()));
    let mut telemetry = ScrollTelemetry::new(Duration::from_millis(10));
    let a = log.clone();
    telemetry.subscribe(move |_| a.borrow_mut().push("progress"));
    let b = log.clone();
    telemetry.subscribe(move |_| b.borrow_mut().push("nav"));
    telemetry.dispatch(ScrollSample::new(0.0, 100.0, 200.0));
    assert_eq!(*log.borrow(), vec!["progress", "nav"]);
}

#[test]
fn telemetry_unsubscribe_stops_delivery() {
    let count = Rc::new(RefCell::new(0));
    let mut telemetry = ScrollTelemetry::new(Duration::from_millis(10));
    let c = count.clone();
    let id = telemetry.subscribe(move |_| *c.borrow_mut() += 1);
    telemetry.dispatch(ScrollSample::new(0.0, 100.0, 200.0));
    assert!(telemetry.unsubscribe(id));
    assert!(!telemetry.unsubscribe(id));
    telemetry.dispatch(ScrollSample::new(10.0, 100.0, 200.0));
    assert_eq!(*count.borrow(), 1);
    assert_eq!(telemetry.subscriber_count(), 0);
}
