//! Named restaurants and collections of them.
//!
//! A [`Restaurant`] pairs a display name with its weekly [`Schedule`]. Records
//! arrive as plain string fields (`name`, `hours`); reading them from files is
//! left to the caller. A [`Directory`] holds the loaded restaurants and answers
//! "who is open at this moment".

mod directory;
mod error;

pub use directory::Directory;
pub use error::RecordError;

use crate::availability::Availability;
use crate::parser::parse;
use crate::schedule::Schedule;
use crate::Id;

/// A restaurant with its opening hours.
///
/// Each restaurant is assigned a unique auto-generated ID upon creation;
/// callers identify restaurants by their human-readable `name`.
///
/// # Example
///
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use resto_hours::availability::Availability;
/// use resto_hours::restaurant::Restaurant;
///
/// let bar = Restaurant::from_record(["Night Owl", "Fri,Sat|20:00-04:00"]).unwrap();
/// assert_eq!(bar.name(), "Night Owl");
/// assert!(bar.is_open(Weekday::Sun, NaiveTime::from_hms_opt(2, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Restaurant {
    /// Unique auto-generated identifier
    id: Id,
    /// Human-readable name
    name: String,
    schedule: Schedule,
}

impl Restaurant {
    /// Creates a restaurant with an auto-generated unique ID.
    ///
    /// Fails if the name is blank or the schedule has no interval at all.
    /// The name is stored exactly as given.
    pub fn new(name: impl Into<String>, schedule: Schedule) -> Result<Self, RecordError> {
        Self::with_id(crate::generate_id(), name.into(), schedule)
    }

    fn with_id(id: Id, name: String, schedule: Schedule) -> Result<Self, RecordError> {
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        if schedule.is_empty() {
            return Err(RecordError::NoOpeningHours(name));
        }
        Ok(Self { id, name, schedule })
    }

    /// Builds a restaurant from a `[name, hours]` record.
    ///
    /// The hours field is parsed permissively; the record is rejected only if
    /// nothing usable remains.
    pub fn from_record<I, S>(fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<S> = fields.into_iter().collect();
        let [name, hours] = fields.as_slice() else {
            return Err(RecordError::FieldCount(fields.len()));
        };
        Self::new(name.as_ref(), parse(hours.as_ref()))
    }

    /// Returns the unique auto-generated identifier for this restaurant.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Availability for Restaurant {
    fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

// =============================================================================
// Restaurant Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Restaurant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            id: Id,
            name: String,
            schedule: Schedule,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::with_id(raw.id, raw.name, raw.schedule).map_err(serde::de::Error::custom)
    }
}
