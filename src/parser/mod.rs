//! Reader for the compact weekly schedule notation.
//!
//! A schedule string is a `;`-separated list of groups, each made of a
//! comma-separated day list and an hour span joined by `|`:
//!
//! ```text
//! Mon,Tue,Wed,Thu,Sun|11:00-22:00;Fri,Sat|11:00-0:00
//! ```
//!
//! Days are the exact three-letter abbreviations `Mon` .. `Sun`. Times use the
//! 24-hour clock with one or two hour digits; `24:00` and `0:00` both mean
//! midnight. An end time earlier than the start time describes an interval
//! running past midnight.
//!
//! The default entry point [`parse`] is permissive: a malformed group, a
//! zero-length span or an unknown day is skipped and the rest of the text is
//! still read. [`ParseConfig`] selects strict handling instead.

mod config;
mod errors;


use std::str::FromStr;

use chrono::NaiveTime;

pub use config::{DuplicateDays, ParseConfig, ParseMode};
pub use errors::ParseError;

use crate::schedule::{day_from_abbrev, OpeningInterval, Schedule};

const GROUP_SEPARATOR: char = ';';
const DAYS_SEPARATOR: char = '|';
const DAY_LIST_SEPARATOR: char = ',';
const SPAN_SEPARATOR: char = '-';

/// Result of a parse: the schedule plus every issue that was skipped over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub schedule: Schedule,
    pub issues: Vec<ParseError>,
}

impl ParseReport {
    /// Returns true if the whole text was read without skipping anything.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parses `text` permissively. Never fails; unusable pieces are dropped.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use resto_hours::parser::parse;
///
/// let schedule = parse("Mon,Tue,Wed,Thu,Sun|11:00-22:00;Fri,Sat|11:00-0:00");
/// assert_eq!(schedule.len(), 7);
/// assert_eq!(schedule.get(Weekday::Mon).unwrap().to_string(), "11:00-22:00");
/// assert!(schedule.get(Weekday::Fri).unwrap().wraps());
/// ```
pub fn parse(text: &str) -> Schedule {
    parse_report(text, &ParseConfig::default())
        .map(|report| report.schedule)
        .unwrap_or_default()
}

/// Parses `text` in strict mode, failing on the first problem.
pub fn parse_strict(text: &str) -> Result<Schedule, ParseError> {
    parse_with(text, &ParseConfig::strict())
}

/// Parses `text` with an explicit configuration.
pub fn parse_with(text: &str, config: &ParseConfig) -> Result<Schedule, ParseError> {
    parse_report(text, config).map(|report| report.schedule)
}

/// Parses `text` and returns the schedule together with the skipped issues.
///
/// In strict mode the first issue is returned as an error instead.
pub fn parse_report(text: &str, config: &ParseConfig) -> Result<ParseReport, ParseError> {
    let mut reader = Reader::new(*config);
    reader.read(text)?;
    Ok(ParseReport {
        schedule: reader.schedule,
        issues: reader.issues,
    })
}

impl FromStr for Schedule {
    type Err = ParseError;

    /// Strict parse; see [`parse_strict`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict(s)
    }
}

/// Accumulates the schedule while walking the groups of one string.
struct Reader {
    config: ParseConfig,
    schedule: Schedule,
    issues: Vec<ParseError>,
}

impl Reader {
    fn new(config: ParseConfig) -> Self {
        Self {
            config,
            schedule: Schedule::new(),
            issues: Vec::new(),
        }
    }

    fn read(&mut self, text: &str) -> Result<(), ParseError> {
        for group in text.split(GROUP_SEPARATOR).map(str::trim) {
            if group.is_empty() {
                continue;
            }
            self.read_group(group)?;
        }
        log::trace!(
            "parsed {} day(s) from '{}' with {} issue(s)",
            self.schedule.len(),
            text,
            self.issues.len()
        );
        Ok(())
    }

    fn read_group(&mut self, group: &str) -> Result<(), ParseError> {
        let Some((day_list, span)) = group.split_once(DAYS_SEPARATOR) else {
            return self.skip(ParseError::malformed(group, "missing '|' separator"));
        };

        let interval = match parse_span(group, span) {
            Ok(interval) => interval,
            Err(issue) => return self.skip(issue),
        };

        for token in day_list.split(DAY_LIST_SEPARATOR).map(str::trim) {
            let Some(day) = day_from_abbrev(token) else {
                self.skip(ParseError::UnknownDayToken(token.to_string()))?;
                continue;
            };
            if self.config.duplicate_days == DuplicateDays::Reject
                && self.schedule.contains_day(day)
            {
                self.skip(ParseError::DuplicateDay(day))?;
                continue;
            }
            self.schedule.insert(day, interval);
        }
        Ok(())
    }

    /// Records a non-fatal issue, or hands it back in strict mode.
    fn skip(&mut self, issue: ParseError) -> Result<(), ParseError> {
        if self.config.is_strict() {
            return Err(issue);
        }
        log::debug!("skipping schedule entry: {issue}");
        self.issues.push(issue);
        Ok(())
    }
}

fn parse_span(group: &str, span: &str) -> Result<OpeningInterval, ParseError> {
    let (start, end) = span
        .split_once(SPAN_SEPARATOR)
        .ok_or_else(|| ParseError::malformed(group, "missing '-' in hour span"))?;

    let start = parse_time(start).ok_or_else(|| {
        ParseError::malformed(group, format!("invalid start time '{}'", start.trim()))
    })?;
    let end = parse_time(end).ok_or_else(|| {
        ParseError::malformed(group, format!("invalid end time '{}'", end.trim()))
    })?;

    OpeningInterval::new(start, end).map_err(|_| ParseError::ZeroLengthInterval {
        group: group.to_string(),
    })
}

/// Reads `H:MM` / `HH:MM` on the 24-hour clock, with `24:00` as midnight.
fn parse_time(token: &str) -> Option<NaiveTime> {
    let (hour, minute) = token.trim().split_once(':')?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute) {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    match (hour, minute) {
        (24, 0) => NaiveTime::from_hms_opt(0, 0, 0),
        _ => NaiveTime::from_hms_opt(hour, minute, 0),
    }
}
