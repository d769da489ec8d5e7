//! Day-of-week tokens used by the schedule notation.

use chrono::Weekday;

/// The seven days in Monday-first order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Resolves a three-letter abbreviation (`Mon` .. `Sun`).
///
/// Matching is exact and case-sensitive: `"mon"` and `"Monday"` are unknown.
pub fn day_from_abbrev(token: &str) -> Option<Weekday> {
    match token {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

#[inline]
pub(crate) fn day_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_abbrev_resolves() {
        let tokens = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        for (token, day) in tokens.iter().zip(WEEK) {
            assert_eq!(day_from_abbrev(token), Some(day));
        }
    }

    #[test]
    fn test_abbrev_is_case_sensitive() {
        assert_eq!(day_from_abbrev("mon"), None);
        assert_eq!(day_from_abbrev("MON"), None);
        assert_eq!(day_from_abbrev("Monday"), None);
        assert_eq!(day_from_abbrev(""), None);
    }

    #[test]
    fn test_week_order_matches_index() {
        for (i, day) in WEEK.iter().enumerate() {
            assert_eq!(day_index(*day), i);
        }
    }

    #[test]
    fn test_previous_day_wraps_monday_to_sunday() {
        assert_eq!(Weekday::Mon.pred(), Weekday::Sun);
        assert_eq!(Weekday::Sun.pred(), Weekday::Sat);
    }
}
