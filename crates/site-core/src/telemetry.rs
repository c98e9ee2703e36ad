//! Scroll sampling and trailing-edge throttling.
//!
//! The browser fires scroll notifications far more often than the page needs
//! to repaint its scroll-linked widgets. [`ScrollTelemetry`] bounds the rate at
//! which subscribers see a [`ScrollSample`] while guaranteeing that the last
//! notification of a burst is always delivered.

use instant::Instant;
use std::time::Duration;

/// Scroll geometry captured for a single notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    /// Build a sample, coercing negative or non-finite scroll offsets to 0.
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        let scroll_top = if scroll_top.is_finite() {
            scroll_top.max(0.0)
        } else {
            0.0
        };
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Distance the page can actually scroll. Zero when the page fits.
    #[inline]
    pub fn scrollable_height(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range.is_finite() {
            range.max(0.0)
        } else {
            0.0
        }
    }

    /// Scroll position as a fraction in [0, 1]; 0 when nothing can scroll.
    #[inline]
    pub fn fraction(&self) -> f64 {
        let range = self.scrollable_height();
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

/// What the caller should do after offering a value to a [`Throttle`].
#[derive(Debug, PartialEq)]
pub enum ThrottleAction<T> {
    /// Process the value now.
    Run(T),
    /// The value is held as the trailing call; schedule a flush after the delay.
    Defer(Duration),
    /// A trailing flush is already scheduled; the held value was replaced.
    Coalesced,
}

/// Trailing-edge rate limiter over an arbitrary value.
///
/// Values arriving within `interval` of the last run are held (only the most
/// recent survives) until [`Throttle::flush`] is called at the deadline
/// reported by the first [`ThrottleAction::Defer`].
#[derive(Debug)]
pub struct Throttle<T> {
    interval: Duration,
    last_run: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn offer(&mut self, now: Instant, value: T) -> ThrottleAction<T> {
        let elapsed = match self.last_run {
            None => None,
            Some(last) => Some(elapsed_between(last, now)),
        };
        match elapsed {
            Some(e) if e <= self.interval => {
                if self.pending.replace(value).is_some() {
                    ThrottleAction::Coalesced
                } else {
                    ThrottleAction::Defer(self.interval - e)
                }
            }
            _ => {
                // A late trailing timer has nothing left to deliver.
                self.pending = None;
                self.last_run = Some(now);
                ThrottleAction::Run(value)
            }
        }
    }

    /// Take the trailing value, if any, and count it as a run at `now`.
    pub fn flush(&mut self, now: Instant) -> Option<T> {
        let value = self.pending.take()?;
        self.last_run = Some(now);
        Some(value)
    }
}

#[inline]
fn elapsed_between(earlier: Instant, now: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}

pub type SubscriberId = usize;

type Subscriber = Box<dyn FnMut(&ScrollSample)>;

/// Throttled dispatcher of scroll samples to an explicit subscriber list.
pub struct ScrollTelemetry {
    throttle: Throttle<ScrollSample>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: SubscriberId,
    latest: Option<ScrollSample>,
}

impl ScrollTelemetry {
    pub fn new(interval: Duration) -> Self {
        Self {
            throttle: Throttle::new(interval),
            subscribers: Vec::new(),
            next_id: 0,
            latest: None,
        }
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&ScrollSample) + 'static) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Last sample handed to subscribers.
    pub fn latest(&self) -> Option<ScrollSample> {
        self.latest
    }

    pub fn has_pending(&self) -> bool {
        self.throttle.has_pending()
    }

    /// Feed one native notification. Returns the delay after which
    /// [`ScrollTelemetry::flush`] must be called, when a new trailing call was
    /// scheduled.
    pub fn notify(&mut self, now: Instant, sample: ScrollSample) -> Option<Duration> {
        match self.throttle.offer(now, sample) {
            ThrottleAction::Run(s) => {
                self.dispatch(s);
                None
            }
            ThrottleAction::Defer(delay) => Some(delay),
            ThrottleAction::Coalesced => None,
        }
    }

    /// Deliver the trailing sample. Returns whether anything was delivered.
    pub fn flush(&mut self, now: Instant) -> bool {
        match self.throttle.flush(now) {
            Some(s) => {
                self.dispatch(s);
                true
            }
            None => false,
        }
    }

    /// Hand a sample to every subscriber immediately, bypassing the throttle.
    pub fn dispatch(&mut self, sample: ScrollSample) {
        self.latest = Some(sample);
        for (_, handler) in self.subscribers.iter_mut() {
            handler(&sample);
        }
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}
