//! Test suite for the Schedule data model.

use super::*;

/// Helper to create intervals more concisely in tests.
fn iv(start: (u32, u32), end: (u32, u32)) -> OpeningInterval {
    OpeningInterval::from_hm(start, end).unwrap()
}

#[cfg(test)]
mod basic_operations {
    use super::*;

    #[test]
    fn test_new_schedule_is_empty() {
        let schedule = Schedule::new();
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
        assert_eq!(schedule.iter().count(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut schedule = Schedule::new();
        assert_eq!(schedule.insert(Weekday::Tue, iv((11, 0), (22, 0))), None);
        assert_eq!(schedule.get(Weekday::Tue), Some(&iv((11, 0), (22, 0))));
        assert!(schedule.contains_day(Weekday::Tue));
        assert!(!schedule.contains_day(Weekday::Wed));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_and_returns_previous() {
        let mut schedule = Schedule::new();
        schedule.insert(Weekday::Fri, iv((11, 0), (22, 0)));
        let previous = schedule.insert(Weekday::Fri, iv((17, 0), (2, 0)));
        assert_eq!(previous, Some(iv((11, 0), (22, 0))));
        assert_eq!(schedule.get(Weekday::Fri), Some(&iv((17, 0), (2, 0))));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_remove_day() {
        let mut schedule = Schedule::new();
        schedule.insert(Weekday::Mon, iv((8, 0), (12, 0)));
        schedule.insert(Weekday::Sun, iv((9, 0), (13, 0)));

        assert_eq!(schedule.remove(Weekday::Mon), Some(iv((8, 0), (12, 0))));
        assert_eq!(schedule.remove(Weekday::Mon), None);
        assert_eq!(schedule.days().collect::<Vec<_>>(), vec![Weekday::Sun]);
    }

    #[test]
    fn test_clear() {
        let mut schedule = Schedule::new();
        schedule.insert(Weekday::Mon, iv((8, 0), (12, 0)));
        schedule.insert(Weekday::Thu, iv((8, 0), (12, 0)));
        schedule.clear();
        assert!(schedule.is_empty());
    }
}

#[cfg(test)]
mod iteration {
    use super::*;

    #[test]
    fn test_iter_runs_monday_to_sunday() {
        let mut schedule = Schedule::new();
        schedule.insert(Weekday::Sun, iv((10, 0), (14, 0)));
        schedule.insert(Weekday::Wed, iv((10, 0), (14, 0)));
        schedule.insert(Weekday::Mon, iv((10, 0), (14, 0)));

        let days: Vec<Weekday> = schedule.days().collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Sun]);
    }

    #[test]
    fn test_from_iter_last_pair_wins() {
        let schedule: Schedule = vec![
            (Weekday::Sat, iv((11, 0), (22, 0))),
            (Weekday::Sat, iv((12, 0), (1, 0))),
        ]
        .into_iter()
        .collect();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get(Weekday::Sat), Some(&iv((12, 0), (1, 0))));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a: Schedule = vec![
            (Weekday::Mon, iv((11, 0), (22, 0))),
            (Weekday::Fri, iv((11, 0), (0, 0))),
        ]
        .into_iter()
        .collect();
        let b: Schedule = vec![
            (Weekday::Fri, iv((11, 0), (0, 0))),
            (Weekday::Mon, iv((11, 0), (22, 0))),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod durations {
    use super::*;

    #[test]
    fn test_weekly_open_time_empty() {
        assert_eq!(Schedule::new().weekly_open_time().value(), 0.0);
    }

    #[test]
    fn test_weekly_open_time_counts_wrapping_tails() {
        let mut schedule = Schedule::new();
        // 11h + 8h
        schedule.insert(Weekday::Mon, iv((11, 0), (22, 0)));
        schedule.insert(Weekday::Sat, iv((20, 0), (4, 0)));
        assert!((schedule.weekly_open_time().value() - 19.0).abs() < 1e-9);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_support {
    use super::*;

    #[test]
    fn test_schedule_json_uses_day_keys() {
        let mut schedule = Schedule::new();
        schedule.insert(Weekday::Mon, iv((11, 0), (22, 0)));

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["Mon"]["start"], "11:00:00");
        assert_eq!(json["Mon"]["end"], "22:00:00");
    }

    #[test]
    fn test_schedule_json_restores_equal_schedule() {
        let mut schedule = Schedule::new();
        schedule.insert(Weekday::Fri, iv((11, 0), (0, 0)));
        schedule.insert(Weekday::Sun, iv((10, 0), (14, 0)));

        let json = serde_json::to_string(&schedule).unwrap();
        let restored: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, schedule);
    }
}
