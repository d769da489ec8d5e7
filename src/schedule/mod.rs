pub mod day;
pub mod errors;
pub mod interval;

#[cfg(test)]
mod tests;

pub use day::{day_from_abbrev, WEEK};
pub use errors::IntervalError;
pub use interval::OpeningInterval;

use chrono::Weekday;
use day::day_index;
use qtty::{Hour, Minute, Quantity};

/// Weekly opening hours: at most one [`OpeningInterval`] per day of the week.
///
/// A day without an entry only means that no interval *starts* on that day.
/// The location may still be open in the early morning because of the
/// previous day's interval running past midnight.
///
/// # Internal Structure
/// - `days`: fixed array indexed by `Weekday::num_days_from_monday()`
///
/// # Complexity
/// - `get` / `insert` / `remove`: O(1)
/// - `iter`: O(7)
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use resto_hours::schedule::{OpeningInterval, Schedule};
///
/// let mut schedule = Schedule::new();
/// schedule.insert(Weekday::Fri, OpeningInterval::from_hm((11, 0), (0, 0)).unwrap());
/// schedule.insert(Weekday::Sat, OpeningInterval::from_hm((11, 0), (0, 0)).unwrap());
///
/// assert_eq!(schedule.len(), 2);
/// assert!(schedule.get(Weekday::Fri).unwrap().wraps());
/// assert_eq!(schedule.get(Weekday::Mon), None);
/// assert!((schedule.weekly_open_time().value() - 26.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Schedule {
    days: [Option<OpeningInterval>; 7],
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days with an interval.
    pub fn len(&self) -> usize {
        self.days.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }

    /// Returns the interval starting on `day`, if any.
    pub fn get(&self, day: Weekday) -> Option<&OpeningInterval> {
        self.days[day_index(day)].as_ref()
    }

    /// Returns true if an interval starts on `day`.
    pub fn contains_day(&self, day: Weekday) -> bool {
        self.get(day).is_some()
    }

    /// Assigns `interval` to `day`, returning the interval it replaced.
    pub fn insert(&mut self, day: Weekday, interval: OpeningInterval) -> Option<OpeningInterval> {
        self.days[day_index(day)].replace(interval)
    }

    /// Removes the interval of `day`. Returns it if it existed.
    pub fn remove(&mut self, day: Weekday) -> Option<OpeningInterval> {
        self.days[day_index(day)].take()
    }

    /// Iterates over `(day, interval)` pairs from Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &OpeningInterval)> + '_ {
        WEEK.iter()
            .zip(self.days.iter())
            .filter_map(|(day, slot)| slot.as_ref().map(|interval| (*day, interval)))
    }

    /// Returns an iterator over the days that have an interval.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.iter().map(|(day, _)| day)
    }

    /// Clears all intervals.
    pub fn clear(&mut self) {
        self.days = [None; 7];
    }

    /// Total time open over one week (sum of all interval durations).
    pub fn weekly_open_time(&self) -> Quantity<Hour> {
        self.iter()
            .map(|(_, interval)| interval.duration())
            .fold(Quantity::<Minute>::new(0.0), |acc, dur| acc + dur)
            .to()
    }
}

impl FromIterator<(Weekday, OpeningInterval)> for Schedule {
    /// Later pairs overwrite earlier ones for the same day.
    fn from_iter<I: IntoIterator<Item = (Weekday, OpeningInterval)>>(iter: I) -> Self {
        let mut schedule = Schedule::new();
        schedule.extend(iter);
        schedule
    }
}

impl Extend<(Weekday, OpeningInterval)> for Schedule {
    fn extend<I: IntoIterator<Item = (Weekday, OpeningInterval)>>(&mut self, iter: I) {
        for (day, interval) in iter {
            self.insert(day, interval);
        }
    }
}

// =============================================================================
// Schedule Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    /// Serialized as a map from day abbreviation to interval, Monday first.
    impl Serialize for Schedule {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_map(self.iter())
        }
    }

    impl<'de> Deserialize<'de> for Schedule {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let map = HashMap::<Weekday, OpeningInterval>::deserialize(deserializer)?;
            Ok(map.into_iter().collect())
        }
    }
}
