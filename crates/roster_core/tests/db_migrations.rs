use roster_core::db::migrations::latest_version;
use roster_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "students");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute_batch(
            "INSERT INTO students (name, course, email, father_name, university_roll, contact,
                parent_contact, college, college_course, semester, department, dob, address,
                registration_date)
             VALUES ('a', 'b', 'c@d.ef', 'g', 'h', '0123456789', '0123456789', 'i', 'j', '1st',
                'k', '2000-01-01', 'l', '2026-01-01 00:00:00');",
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let rows: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1, "reopening must not recreate or wipe the table");
}

#[test]
fn certificate_column_defaults_to_not_issued() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO students (name, course, email, father_name, university_roll, contact,
            parent_contact, college, college_course, semester, department, dob, address,
            registration_date)
         VALUES ('a', 'b', 'c@d.ef', 'g', 'h', '0123456789', '0123456789', 'i', 'j', '1st',
            'k', '2000-01-01', 'l', '2026-01-01 00:00:00');",
    )
    .unwrap();

    let certificate: String = conn
        .query_row("SELECT certificate FROM students WHERE id = 1;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(certificate, "Not Issued");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_unreachable_path_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("students.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)), "unexpected error: {err}");
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
