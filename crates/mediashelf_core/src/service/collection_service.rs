//! Collection use-case service: the mutation and query engine.
//!
//! # Responsibility
//! - Expose the five collection operations over raw request values.
//! - Parse and validate caller input before any repository call.
//! - Log mutating failures to the operator channel, then return them as
//!   values; callers never observe a partially applied change.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::category::{Category, CategoryId};
use crate::model::content::{Content, ContentId, NewContent};
use crate::model::ValidationError;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::content_repo::{ContentListQuery, ContentRepository, SortKey};
use crate::repo::{RepoError, RepoResult};
use log::error;
use serde::Serialize;

/// Raw form values for creating a content row.
///
/// `category_id` stays a string here on purpose: the request layer hands
/// form fields through untouched, and parsing failures become explicit
/// validation errors instead of silent inaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddContentRequest {
    pub title: String,
    pub category_id: String,
    pub memo: Option<String>,
    pub is_owned: bool,
}

/// Raw query parameters for the content listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListContentRequest {
    /// Exact category filter; absent or empty means no filter.
    pub filter_category_id: Option<String>,
    /// Sort parameter; anything unrecognized falls back to newest-first.
    pub sort: Option<String>,
}

/// Listing result: ordered contents, the full category set for
/// presentation, and the effective filter/sort values that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentListing {
    pub contents: Vec<Content>,
    pub categories: Vec<Category>,
    pub filter_category_id: Option<CategoryId>,
    pub sort: SortKey,
}

/// Use-case service wrapper for the collection engine operations.
pub struct CollectionService<C: CategoryRepository, T: ContentRepository> {
    categories: C,
    contents: T,
}

impl<C: CategoryRepository, T: ContentRepository> CollectionService<C, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(categories: C, contents: T) -> Self {
        Self {
            categories,
            contents,
        }
    }

    /// Creates a content row from raw form values.
    ///
    /// # Contract
    /// - Empty `title` or `category_id`, or a non-integer `category_id`,
    ///   is a `Validation` error with nothing attempted.
    /// - A `category_id` that references no category is `CategoryNotFound`
    ///   with nothing applied.
    pub fn add_content(&self, request: &AddContentRequest) -> RepoResult<ContentId> {
        let category_id = parse_category_id(&request.category_id)?;
        let draft = NewContent {
            title: request.title.clone(),
            memo: normalize_memo(request.memo.as_deref()),
            is_owned: request.is_owned,
            category_id,
        };

        self.contents
            .add_content(&draft)
            .inspect_err(|err| log_mutation_failure("add_content", err))
    }

    /// Deletes a content row by id. Absent ids are `ContentNotFound`,
    /// distinct from store failures.
    pub fn delete_content(&self, id: ContentId) -> RepoResult<()> {
        self.contents
            .delete_content(id)
            .inspect_err(|err| log_mutation_failure("delete_content", err))
    }

    /// Adds a category by name, idempotently.
    ///
    /// # Contract
    /// - Empty name is a `Validation` error.
    /// - An existing identical name is success and returns its id.
    pub fn add_category(&self, name: &str) -> RepoResult<CategoryId> {
        self.categories
            .add_category(name)
            .inspect_err(|err| log_mutation_failure("add_category", err))
    }

    /// Deletes a category and, atomically with it, every content row it
    /// owns. Absent ids are `CategoryNotFound` and leave the store
    /// untouched.
    pub fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        self.categories
            .delete_category(id)
            .inspect_err(|err| log_mutation_failure("delete_category", err))
    }

    /// Lists contents with the requested filter and ordering, plus the full
    /// category set for presentation.
    pub fn list_content(&self, request: &ListContentRequest) -> RepoResult<ContentListing> {
        let filter_category_id = match request.filter_category_id.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_category_id(raw)?),
        };
        let sort = request
            .sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or_default();

        let query = ContentListQuery {
            category_id: filter_category_id,
            sort,
        };
        let contents = self.contents.list_contents(&query)?;
        let categories = self.categories.list_categories()?;

        Ok(ContentListing {
            contents,
            categories,
            filter_category_id,
            sort,
        })
    }
}

fn parse_category_id(raw: &str) -> RepoResult<CategoryId> {
    if raw.is_empty() {
        return Err(ValidationError::MissingField("category_id").into());
    }
    raw.parse::<CategoryId>()
        .map_err(|_| ValidationError::InvalidCategoryId(raw.to_string()).into())
}

fn normalize_memo(memo: Option<&str>) -> Option<String> {
    match memo {
        None | Some("") => None,
        Some(value) => Some(value.to_string()),
    }
}

fn log_mutation_failure(operation: &str, err: &RepoError) {
    error!("event={operation} module=service status=error error={err}");
}
