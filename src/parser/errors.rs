use chrono::Weekday;
use thiserror::Error;

/// Problems met while reading a schedule string.
///
/// In permissive mode each of these is non-fatal: the offending group or day
/// is dropped and parsing moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed group '{group}': {reason}")]
    MalformedGroup { group: String, reason: String },

    #[error("Zero-length interval in group '{group}'")]
    ZeroLengthInterval { group: String },

    #[error("Unknown day token: {0}")]
    UnknownDayToken(String),

    #[error("Day {0} is assigned more than once")]
    DuplicateDay(Weekday),
}

impl ParseError {
    pub(crate) fn malformed(group: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedGroup {
            group: group.to_string(),
            reason: reason.into(),
        }
    }
}
