//! One-shot default category seeding.
//!
//! # Responsibility
//! - Insert the fixed default category set when the table is empty.
//!
//! # Invariants
//! - Runs inside one transaction: either all defaults exist or none do.
//! - Idempotent: any pre-existing category (default or not) makes this a
//!   no-op, so repeated bootstrap never duplicates rows.

use crate::db::DbResult;
use log::info;
use rusqlite::Connection;

/// Default category names, inserted in this order on first startup.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["アニメ", "漫画", "小説", "映画", "ゲーム"];

/// Seeds default categories when the `categories` table is empty.
///
/// Returns `true` when the defaults were inserted, `false` when the table
/// already had rows and nothing was done.
pub fn seed_default_categories(conn: &mut Connection) -> DbResult<bool> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(false);
    }

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare("INSERT INTO categories (name) VALUES (?1);")?;
        for name in DEFAULT_CATEGORIES {
            stmt.execute([name])?;
        }
    }
    tx.commit()?;

    info!(
        "event=seed_categories module=db status=ok inserted={}",
        DEFAULT_CATEGORIES.len()
    );
    Ok(true)
}
