//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mediashelf_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use mediashelf_core::db::open_db_in_memory;
use mediashelf_core::{CategoryRepository, SqliteCategoryRepository};

fn main() {
    println!("mediashelf_core version={}", mediashelf_core::core_version());

    // Opening an in-memory store exercises migrations and the default seed
    // without touching the filesystem.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let categories = SqliteCategoryRepository::try_new(&conn)
        .and_then(|repo| repo.list_categories());
    match categories {
        Ok(categories) => {
            println!("seeded categories={}", categories.len());
            for category in categories {
                println!("  {} {}", category.id, category.name);
            }
        }
        Err(err) => {
            eprintln!("failed to list categories: {err}");
            std::process::exit(1);
        }
    }
}
