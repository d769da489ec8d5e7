//! Open/closed evaluation over weekly schedules.
//!
//! Every interval belongs to the day it starts on. A query `(day, time)` is
//! answered from two places:
//!
//! 1. the interval starting on `day`, read with exclusive boundaries
//!    (`start < time < end`, or just `start < time` if it runs past midnight);
//! 2. when `time` is earlier than that interval (or `day` has none), the
//!    after-midnight tail of the previous day's interval, open while
//!    `time < end`.
//!
//! The evaluation is total: any schedule, any day, any time gives a boolean.


use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

use crate::schedule::Schedule;

/// Something that can be asked whether it is open at a point in weekly time.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use resto_hours::availability::Availability;
/// use resto_hours::parser::parse;
///
/// let schedule = parse("Sat|20:00-04:00");
/// let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
///
/// assert!(schedule.is_open(Weekday::Sat, at(21)));
/// assert!(schedule.is_open(Weekday::Sun, at(3)));
/// assert!(!schedule.is_open(Weekday::Sun, at(5)));
/// assert!(!schedule.is_open(Weekday::Sat, at(3)));
/// ```
pub trait Availability {
    /// The weekly schedule to evaluate.
    fn schedule(&self) -> &Schedule;

    /// Returns true if open on `day` at `time`.
    fn is_open(&self, day: Weekday, time: NaiveTime) -> bool {
        is_open(self.schedule(), day, time)
    }

    /// Returns true if open at the calendar date-time `at`.
    fn is_open_at(&self, at: NaiveDateTime) -> bool {
        is_open_at(self.schedule(), at)
    }
}

impl Availability for Schedule {
    fn schedule(&self) -> &Schedule {
        self
    }
}

/// Decides whether `schedule` is open on `day` at `time`.
pub fn is_open(schedule: &Schedule, day: Weekday, time: NaiveTime) -> bool {
    if let Some(today) = schedule.get(day) {
        if today.covers(time) {
            return true;
        }
        // Once a same-day interval has started, it alone decides.
        if today.start() <= time && !today.wraps() {
            return false;
        }
    }
    carried_over(schedule, day, time)
}

/// Decides whether `schedule` is open at `at`, using its calendar weekday.
pub fn is_open_at(schedule: &Schedule, at: NaiveDateTime) -> bool {
    is_open(schedule, at.weekday(), at.time())
}

fn carried_over(schedule: &Schedule, day: Weekday, time: NaiveTime) -> bool {
    schedule
        .get(day.pred())
        .is_some_and(|yesterday| yesterday.carries_over(time))
}
