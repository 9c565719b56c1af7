//! Content domain model.
//!
//! # Responsibility
//! - Define the persisted content row and the insert-time draft shape.
//!
//! # Invariants
//! - `title` is non-empty and at most 127 characters.
//! - `memo` is at most 255 characters when present.
//! - `category_id` must reference an existing category at creation time.

use crate::model::category::CategoryId;
use crate::model::{require_max_chars, require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a content row.
pub type ContentId = i64;

pub const MAX_TITLE_CHARS: usize = 127;
pub const MAX_MEMO_CHARS: usize = 255;

/// One tracked item (anime, manga, novel, film, game, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub memo: Option<String>,
    pub is_owned: bool,
    pub category_id: CategoryId,
}

/// Draft for a content row before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    pub title: String,
    pub memo: Option<String>,
    pub is_owned: bool,
    pub category_id: CategoryId,
}

impl NewContent {
    /// Checks field-shape constraints. Referential existence of
    /// `category_id` is left to the store's foreign key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_max_chars("title", &self.title, MAX_TITLE_CHARS)?;
        if let Some(memo) = &self.memo {
            require_max_chars("memo", memo, MAX_MEMO_CHARS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{NewContent, MAX_MEMO_CHARS, MAX_TITLE_CHARS};
    use crate::model::ValidationError;

    fn draft(title: &str) -> NewContent {
        NewContent {
            title: title.to_string(),
            memo: None,
            is_owned: false,
            category_id: 1,
        }
    }

    #[test]
    fn validate_accepts_minimal_draft() {
        draft("Cowboy Bebop").validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_title() {
        assert_eq!(
            draft("").validate().unwrap_err(),
            ValidationError::MissingField("title")
        );
    }

    #[test]
    fn validate_rejects_over_long_title() {
        let err = draft(&"t".repeat(MAX_TITLE_CHARS + 1)).validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::FieldTooLong { field: "title", .. }
        ));
    }

    #[test]
    fn validate_rejects_over_long_memo() {
        let mut item = draft("ok");
        item.memo = Some("m".repeat(MAX_MEMO_CHARS + 1));
        assert!(matches!(
            item.validate().unwrap_err(),
            ValidationError::FieldTooLong { field: "memo", .. }
        ));
    }

    #[test]
    fn empty_memo_is_allowed() {
        let mut item = draft("ok");
        item.memo = Some(String::new());
        item.validate().unwrap();
    }
}
