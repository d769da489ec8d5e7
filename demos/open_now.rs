//! Lists which restaurants are open at a few points of the week.
//!
//! Run with: `cargo run --example open_now`

use chrono::{NaiveTime, Weekday};
use resto_hours::{Availability, Directory};

const RECORDS: [[&str; 2]; 5] = [
    ["Burger Bar", "Mon,Tue,Wed,Thu,Sun|11:00-22:00;Fri,Sat|11:00-0:00"],
    ["Night Owl", "Thu,Fri,Sat|20:00-04:00"],
    ["Lunch Box", "Mon,Tue,Wed,Thu,Fri|11:30-14:30"],
    ["Sunday Brunch", "Sun|09:00-15:00"],
    ["Typo Tavern", "Mnday|10:00-10:00"],
];

fn main() {
    println!("=== Restaurant Opening Hours Example ===\n");

    let directory = Directory::from_records(RECORDS);
    println!("Loaded {} of {} records", directory.len(), RECORDS.len());

    println!("\n--- Weekly Hours ---");
    for restaurant in directory.all() {
        println!(
            "{}: {:.1} h/week",
            restaurant.name(),
            restaurant.schedule().weekly_open_time().value()
        );
        for (day, interval) in restaurant.schedule().iter() {
            println!("  {day}: {interval}");
        }
    }

    println!("\n--- Open Now? ---");
    let queries = [
        (Weekday::Wed, 12, 0),
        (Weekday::Fri, 23, 30),
        (Weekday::Sat, 2, 0),
        (Weekday::Sun, 3, 0),
        (Weekday::Sun, 5, 0),
    ];
    for (day, hour, minute) in queries {
        let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
            continue;
        };
        let open: Vec<&str> = directory
            .open_at(day, time)
            .into_iter()
            .map(|r| r.name())
            .collect();
        println!("{day} {}: {:?}", time.format("%H:%M"), open);
    }
}
