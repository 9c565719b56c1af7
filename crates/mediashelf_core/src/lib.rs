//! Core domain logic for MediaShelf.
//! This crate is the single source of truth for collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::content::{Content, ContentId, NewContent};
pub use model::ValidationError;
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::content_repo::{
    ContentListQuery, ContentRepository, SortKey, SqliteContentRepository,
};
pub use repo::{RepoError, RepoResult};
pub use service::collection_service::{
    AddContentRequest, CollectionService, ContentListing, ListContentRequest,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
