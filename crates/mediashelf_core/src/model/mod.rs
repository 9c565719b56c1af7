//! Domain model for the collection: categories and the contents they own.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Enforce field-shape invariants before anything reaches SQL.
//!
//! # Invariants
//! - Every entity is identified by a store-assigned integer id.
//! - A content row always references exactly one existing category.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category;
pub mod content;

/// Field-shape violation detected before a write reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent or empty.
    MissingField(&'static str),
    /// A field exceeded its maximum length in characters.
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// The caller-supplied category id was not an integer.
    InvalidCategoryId(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing or empty"),
            Self::FieldTooLong { field, max, actual } => write!(
                f,
                "field `{field}` is {actual} characters long, maximum is {max}"
            ),
            Self::InvalidCategoryId(value) => {
                write!(f, "category id `{value}` is not a valid integer")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, max, actual });
    }
    Ok(())
}
