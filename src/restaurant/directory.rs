//! In-memory collection of restaurants.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};

use super::Restaurant;
use crate::availability::Availability;

/// Restaurants loaded from records, queried by point in weekly time.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    restaurants: Vec<Restaurant>,
}

impl Directory {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// Loads every valid `[name, hours]` record, skipping invalid ones.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{NaiveTime, Weekday};
    /// use resto_hours::restaurant::Directory;
    ///
    /// let directory = Directory::from_records(vec![
    ///     vec!["Burger Bar", "Mon,Tue,Wed,Thu,Sun|11:00-22:00;Fri,Sat|11:00-0:00"],
    ///     vec!["Night Owl", "Sat|20:00-04:00"],
    ///     vec!["Broken", "Mon|12:00-12:00"],
    /// ]);
    /// assert_eq!(directory.len(), 2);
    ///
    /// let open = directory.open_at(Weekday::Sun, NaiveTime::from_hms_opt(3, 0, 0).unwrap());
    /// assert_eq!(open.iter().map(|r| r.name()).collect::<Vec<_>>(), vec!["Night Owl"]);
    /// ```
    pub fn from_records<R, I, S>(records: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut restaurants = Vec::new();
        let mut rejected = 0usize;
        for (line, record) in records.into_iter().enumerate() {
            match Restaurant::from_record(record) {
                Ok(restaurant) => restaurants.push(restaurant),
                Err(e) => {
                    rejected += 1;
                    log::warn!("skipping restaurant record {}: {}", line + 1, e);
                }
            }
        }
        log::debug!(
            "loaded {} restaurant(s), rejected {}",
            restaurants.len(),
            rejected
        );
        Self { restaurants }
    }

    pub fn push(&mut self, restaurant: Restaurant) {
        self.restaurants.push(restaurant);
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// All restaurants in load order.
    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// First restaurant with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name() == name)
    }

    /// Restaurants open on `day` at `time`, in load order.
    pub fn open_at(&self, day: Weekday, time: NaiveTime) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| r.is_open(day, time))
            .collect()
    }

    /// Restaurants open at the calendar date-time `at`.
    pub fn open_at_datetime(&self, at: NaiveDateTime) -> Vec<&Restaurant> {
        self.open_at(at.weekday(), at.time())
    }
}

impl FromIterator<Restaurant> for Directory {
    fn from_iter<T: IntoIterator<Item = Restaurant>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
