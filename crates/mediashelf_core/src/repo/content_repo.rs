//! Content repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist content rows and run the filter/sort listing query.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `NewContent::validate()` before SQL mutations.
//! - A foreign-key violation on insert surfaces as `CategoryNotFound`
//!   with no row applied.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::category::CategoryId;
use crate::model::content::{Content, ContentId, NewContent};
use crate::repo::{bool_to_int, ensure_connection_ready, int_to_bool, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use serde::{Deserialize, Serialize};

const CONTENT_COLUMNS: &[&str] = &["id", "title", "memo", "is_owned", "category_id"];

const CONTENT_SELECT_SQL: &str = "SELECT
    contents.id,
    contents.title,
    contents.memo,
    contents.is_owned,
    contents.category_id
FROM contents";

/// Ordering applied to the content listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// `title` ascending.
    Title,
    /// Joined category name ascending.
    Category,
    /// Owned rows first.
    IsOwned,
    /// Descending id, newest insert first. The fallback for any
    /// unrecognized sort value.
    #[default]
    Newest,
}

impl SortKey {
    /// Parses a raw sort parameter, falling back to `Newest`.
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "category" => Self::Category,
            "is_owned" => Self::IsOwned,
            _ => Self::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::IsOwned => "is_owned",
            Self::Newest => "id",
        }
    }

    fn order_clause(self) -> &'static str {
        match self {
            Self::Title => " ORDER BY contents.title ASC",
            Self::Category => " ORDER BY categories.name ASC",
            Self::IsOwned => " ORDER BY contents.is_owned DESC",
            Self::Newest => " ORDER BY contents.id DESC",
        }
    }
}

/// Query options for listing contents.
#[derive(Debug, Clone, Default)]
pub struct ContentListQuery {
    pub category_id: Option<CategoryId>,
    pub sort: SortKey,
}

/// Repository interface for content operations.
pub trait ContentRepository {
    fn add_content(&self, draft: &NewContent) -> RepoResult<ContentId>;
    fn get_content(&self, id: ContentId) -> RepoResult<Option<Content>>;
    fn list_contents(&self, query: &ContentListQuery) -> RepoResult<Vec<Content>>;
    fn delete_content(&self, id: ContentId) -> RepoResult<()>;
}

/// SQLite-backed content repository.
pub struct SqliteContentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContentRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting one without the expected
    /// schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "contents", CONTENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ContentRepository for SqliteContentRepository<'_> {
    fn add_content(&self, draft: &NewContent) -> RepoResult<ContentId> {
        draft.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let inserted = tx.execute(
            "INSERT INTO contents (title, memo, is_owned, category_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.title.as_str(),
                draft.memo.as_deref(),
                bool_to_int(draft.is_owned),
                draft.category_id,
            ],
        );

        match inserted {
            Ok(_) => {
                let id = tx.last_insert_rowid();
                tx.commit()?;
                Ok(id)
            }
            Err(err) if is_foreign_key_violation(&err) => {
                Err(RepoError::CategoryNotFound(draft.category_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_content(&self, id: ContentId) -> RepoResult<Option<Content>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTENT_SELECT_SQL} WHERE contents.id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_content_row(row)?));
        }
        Ok(None)
    }

    fn list_contents(&self, query: &ContentListQuery) -> RepoResult<Vec<Content>> {
        let mut sql = CONTENT_SELECT_SQL.to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        if query.sort == SortKey::Category {
            sql.push_str(" JOIN categories ON categories.id = contents.category_id");
        }

        if let Some(category_id) = query.category_id {
            sql.push_str(" WHERE contents.category_id = ?");
            bind_values.push(Value::Integer(category_id));
        }

        sql.push_str(query.sort.order_clause());

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut contents = Vec::new();
        while let Some(row) = rows.next()? {
            contents.push(parse_content_row(row)?);
        }
        Ok(contents)
    }

    fn delete_content(&self, id: ContentId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute("DELETE FROM contents WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::ContentNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }
}

fn parse_content_row(row: &Row<'_>) -> RepoResult<Content> {
    let is_owned = int_to_bool("contents.is_owned", row.get("is_owned")?)?;
    Ok(Content {
        id: row.get("id")?,
        title: row.get("title")?,
        memo: row.get("memo")?,
        is_owned,
        category_id: row.get("category_id")?,
    })
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
