use mediashelf_core::db::{open_db_in_memory, DEFAULT_CATEGORIES};
use mediashelf_core::{
    CategoryRepository, ContentRepository, NewContent, RepoError, SqliteCategoryRepository,
    SqliteContentRepository, ValidationError,
};
use rusqlite::Connection;

#[test]
fn add_category_assigns_id_and_persists_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let id = repo.add_category("Board Games").unwrap();

    let category = repo.get_category(id).unwrap().unwrap();
    assert_eq!(category.name, "Board Games");
}

#[test]
fn add_category_twice_keeps_exactly_one_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let first = repo.add_category("Figures").unwrap();
    let second = repo.add_category("Figures").unwrap();
    assert_eq!(first, second);

    let matching: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM categories WHERE name = 'Figures';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(matching, 1);
}

#[test]
fn category_names_are_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let lower = repo.add_category("games").unwrap();
    let upper = repo.add_category("Games").unwrap();
    assert_ne!(lower, upper);
}

#[test]
fn add_category_rejects_empty_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let err = repo.add_category("").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingField("name"))
    ));
}

#[test]
fn add_category_rejects_over_long_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let err = repo.add_category(&"n".repeat(51)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::FieldTooLong { field: "name", .. })
    ));
}

#[test]
fn list_categories_returns_seeded_defaults_in_insert_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let names: Vec<String> = repo
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, DEFAULT_CATEGORIES);
}

#[test]
fn delete_category_removes_its_contents_atomically() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    let contents = SqliteContentRepository::try_new(&conn).unwrap();

    let doomed = categories.add_category("Doomed").unwrap();
    let survivor = categories.add_category("Survivor").unwrap();
    for title in ["one", "two", "three"] {
        contents.add_content(&draft(title, doomed)).unwrap();
    }
    let kept = contents.add_content(&draft("kept", survivor)).unwrap();

    categories.delete_category(doomed).unwrap();

    assert_eq!(rows_referencing(&conn, doomed), 0);
    assert!(categories.get_category(doomed).unwrap().is_none());
    assert!(contents.get_content(kept).unwrap().is_some());
}

#[test]
fn delete_missing_category_is_not_found_and_touches_nothing() {
    let conn = open_db_in_memory().unwrap();
    let categories = SqliteCategoryRepository::try_new(&conn).unwrap();
    let contents = SqliteContentRepository::try_new(&conn).unwrap();

    let home = categories.add_category("Home").unwrap();
    contents.add_content(&draft("untouched", home)).unwrap();
    let categories_before = count(&conn, "categories");
    let contents_before = count(&conn, "contents");

    let err = categories.delete_category(999).unwrap_err();
    assert!(matches!(err, RepoError::CategoryNotFound(999)));

    assert_eq!(count(&conn, "categories"), categories_before);
    assert_eq!(count(&conn, "contents"), contents_before);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCategoryRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

fn draft(title: &str, category_id: i64) -> NewContent {
    NewContent {
        title: title.to_string(),
        memo: None,
        is_owned: false,
        category_id,
    }
}

fn rows_referencing(conn: &Connection, category_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM contents WHERE category_id = ?1;",
        [category_id],
        |row| row.get(0),
    )
    .unwrap()
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
