use thiserror::Error;

/// Reasons an [`OpeningInterval`](super::OpeningInterval) cannot be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// Start and end denote the same instant, so the interval has no length.
    #[error("Opening interval cannot start and end at the same time")]
    ZeroLength,

    /// Hour/minute pair outside the 24-hour clock.
    #[error("Invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_display() {
        assert_eq!(
            IntervalError::ZeroLength.to_string(),
            "Opening interval cannot start and end at the same time"
        );
    }

    #[test]
    fn invalid_time_display() {
        let e = IntervalError::InvalidTime {
            hour: 25,
            minute: 7,
        };
        assert_eq!(e.to_string(), "Invalid time of day 25:07");
    }
}
