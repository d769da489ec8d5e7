use thiserror::Error;

/// Reasons a restaurant record is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected 2 fields (name, hours), found {0}")]
    FieldCount(usize),

    #[error("Restaurant name is empty")]
    EmptyName,

    #[error("Restaurant '{0}' has no usable opening hours")]
    NoOpeningHours(String),
}
