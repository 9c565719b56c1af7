//! Category domain model.
//!
//! # Invariants
//! - `name` is non-empty, at most 50 characters, and unique store-wide.
//! - Deleting a category removes every content row referencing it.

use crate::model::{require_max_chars, require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a category row.
pub type CategoryId = i64;

pub const MAX_NAME_CHARS: usize = 50;

/// A user-defined grouping for collection contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Checks a candidate category name against shape constraints.
    ///
    /// Uniqueness is not checked here; the store's UNIQUE constraint is the
    /// single atomic authority on duplicates.
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        require_non_empty("name", name)?;
        require_max_chars("name", name, MAX_NAME_CHARS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, MAX_NAME_CHARS};
    use crate::model::ValidationError;

    #[test]
    fn validate_name_accepts_reasonable_names() {
        Category::validate_name("アニメ").unwrap();
        Category::validate_name("Board Games").unwrap();
    }

    #[test]
    fn validate_name_rejects_empty() {
        assert_eq!(
            Category::validate_name("").unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn validate_name_rejects_over_limit() {
        let long = "x".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(
            Category::validate_name(&long).unwrap_err(),
            ValidationError::FieldTooLong {
                field: "name",
                max: 50,
                actual: 51,
            }
        ));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 50 multibyte characters are within the limit even at 150 bytes.
        let name = "あ".repeat(MAX_NAME_CHARS);
        Category::validate_name(&name).unwrap();
    }
}
