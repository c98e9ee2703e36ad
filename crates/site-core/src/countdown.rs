use crate::constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Units in display order: days, hours, minutes, seconds.
    pub fn units(&self) -> [i64; 4] {
        [self.days, self.hours, self.minutes, self.seconds]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Running(TimeLeft),
    Finished,
}

/// Countdown toward a fixed wall-clock instant (ms since the Unix epoch).
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    target_ms: i64,
}

impl Countdown {
    pub fn new(target_ms: i64) -> Self {
        Self { target_ms }
    }

    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    pub fn tick(&self, now_ms: i64) -> CountdownTick {
        let diff = self.target_ms - now_ms;
        if diff > 0 {
            CountdownTick::Running(TimeLeft::from_millis(diff))
        } else {
            CountdownTick::Finished
        }
    }
}

/// Two-digit display of a unit; larger values keep all their digits.
#[inline]
pub fn format_unit(value: i64) -> String {
    format!("{:02}", value.max(0))
}
