//! Opening interval anchored to the day it starts on.

use std::fmt::Display;

use chrono::NaiveTime;
use qtty::{Minute, Quantity};

use super::errors::IntervalError;
use crate::units::{minute_of_day, span_between};

/// Contiguous span `(start, end)` during which a location is open.
///
/// When `end` is earlier than `start` the interval wraps past midnight: it
/// covers the late evening of its own day and the early morning of the next
/// one. Both boundary instants are treated as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpeningInterval {
    start: NaiveTime,
    end: NaiveTime,
}

impl OpeningInterval {
    /// Creates the interval `(start, end)`.
    ///
    /// Fails with [`IntervalError::ZeroLength`] when `start == end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, IntervalError> {
        if start == end {
            return Err(IntervalError::ZeroLength);
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from hour/minute pairs on the 24-hour clock.
    ///
    /// ```
    /// use resto_hours::schedule::OpeningInterval;
    ///
    /// let late = OpeningInterval::from_hm((20, 0), (4, 0)).unwrap();
    /// assert!(late.wraps());
    /// assert_eq!(late.to_string(), "20:00-04:00");
    /// ```
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Result<Self, IntervalError> {
        Self::new(time_of_day(start)?, time_of_day(end)?)
    }

    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns true if the interval crosses midnight into the next day.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Returns true if `time` falls inside the part of the interval that
    /// belongs to its own day.
    ///
    /// For a same-day interval this is `start < time < end`; for a wrapping
    /// interval it is `start < time` (the rest lies on the next day).
    pub fn covers(&self, time: NaiveTime) -> bool {
        if self.wraps() {
            self.start < time
        } else {
            self.start < time && time < self.end
        }
    }

    /// Returns true if `time`, read on the following day, is still inside the
    /// after-midnight tail of this interval.
    pub fn carries_over(&self, time: NaiveTime) -> bool {
        self.wraps() && time < self.end
    }

    /// Total length of the interval, including any part past midnight.
    pub fn duration(&self) -> Quantity<Minute> {
        span_between(self.start, self.end)
    }

    pub fn start_minute_of_day(&self) -> u32 {
        minute_of_day(self.start)
    }

    pub fn end_minute_of_day(&self) -> u32 {
        minute_of_day(self.end)
    }
}

impl Display for OpeningInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn time_of_day((hour, minute): (u32, u32)) -> Result<NaiveTime, IntervalError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(IntervalError::InvalidTime { hour, minute })
}

// =============================================================================
// OpeningInterval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OpeningInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: NaiveTime,
            end: NaiveTime,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
