//! Category repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and query category rows.
//! - Keep duplicate handling atomic: one INSERT attempt, no read-then-write.
//!
//! # Invariants
//! - `add_category` is idempotent per name and returns the surviving row id.
//! - `delete_category` removes the row and, through the store cascade, every
//!   content row referencing it, in one transaction.

use crate::model::category::{Category, CategoryId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{Connection, Transaction, TransactionBehavior};

const CATEGORY_COLUMNS: &[&str] = &["id", "name"];

/// Repository interface for category operations.
pub trait CategoryRepository {
    /// Inserts a category, treating an existing identical name as success.
    fn add_category(&self, name: &str) -> RepoResult<CategoryId>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    /// Deletes a category and cascades to its contents.
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting one without the expected
    /// schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "categories", CATEGORY_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn add_category(&self, name: &str) -> RepoResult<CategoryId> {
        Category::validate_name(name)?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "INSERT INTO categories (name) VALUES (?1)
             ON CONFLICT (name) DO NOTHING;",
            [name],
        )?;

        // changed == 0 means the name already existed; the conflict itself
        // is the duplicate signal, so look up the surviving row's id.
        let id = if changed == 0 {
            tx.query_row("SELECT id FROM categories WHERE name = ?1;", [name], |row| {
                row.get(0)
            })?
        } else {
            tx.last_insert_rowid()
        };
        tx.commit()?;

        Ok(id)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories WHERE id = ?1;")?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Category {
                id: row.get("id")?,
                name: row.get("name")?,
            }));
        }
        Ok(None)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(Category {
                id: row.get("id")?,
                name: row.get("name")?,
            });
        }
        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        if changed == 0 {
            // Nothing touched; the implicit rollback on drop leaves the
            // store exactly as it was.
            return Err(RepoError::CategoryNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }
}
