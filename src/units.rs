//! Conversions between wall-clock times and `qtty` time quantities.
//!
//! Opening intervals are stored as `chrono::NaiveTime` values, while lengths of
//! time (how long a place stays open, how many hours per week) are expressed as
//! typed `qtty` quantities so callers can convert them freely.

use chrono::{NaiveTime, Timelike};
use qtty::{Minute, Quantity};

/// Number of minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Whole minutes elapsed since midnight, ignoring seconds.
#[inline]
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Length of the span from `start` to `end`, rolling over midnight when
/// `end` is earlier than `start`.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use resto_hours::units::span_between;
///
/// let start = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(4, 0, 0).unwrap();
/// assert_eq!(span_between(start, end).value(), 480.0);
/// ```
pub fn span_between(start: NaiveTime, end: NaiveTime) -> Quantity<Minute> {
    let from = minute_of_day(start);
    let to = minute_of_day(end);
    let minutes = if to >= from {
        to - from
    } else {
        MINUTES_PER_DAY - from + to
    };
    Quantity::<Minute>::new(f64::from(minutes))
}
