//! Configuration for the schedule parser.

/// How the parser reacts to a malformed piece of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip the offending group or day and keep going.
    #[default]
    Permissive,
    /// Stop at the first problem and report it.
    Strict,
}

/// What to do when a day is named by more than one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateDays {
    /// The later group replaces the earlier assignment.
    #[default]
    Overwrite,
    /// Report [`ParseError::DuplicateDay`](super::ParseError::DuplicateDay);
    /// in permissive mode the earlier assignment is kept.
    Reject,
}

/// Parser configuration.
///
/// The default reproduces the permissive, last-write-wins behavior of
/// [`parse`](super::parse).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseConfig {
    pub mode: ParseMode,
    pub duplicate_days: DuplicateDays,
}

impl ParseConfig {
    /// Strict mode with duplicate days rejected.
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
            duplicate_days: DuplicateDays::Reject,
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_duplicate_days(mut self, duplicate_days: DuplicateDays) -> Self {
        self.duplicate_days = duplicate_days;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }
}
