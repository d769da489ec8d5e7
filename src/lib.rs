//! resto_hours - weekly opening hours for restaurants
//!
//! Parses the compact `Mon,Tue|11:00-22:00;Fri,Sat|11:00-0:00` notation into
//! per-day opening intervals and answers whether a place is open at a given
//! day of the week and time of day, including intervals that run past
//! midnight into the next day.

pub mod availability;
pub mod parser;
pub mod restaurant;
pub mod schedule;
pub mod units;

pub use availability::{is_open, is_open_at, Availability};
pub use parser::{parse, ParseError};
pub use restaurant::{Directory, Restaurant};
pub use schedule::{OpeningInterval, Schedule};

/// Identifier type used for restaurants.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
