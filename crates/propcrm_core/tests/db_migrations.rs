use propcrm_core::db::migrations::latest_version;
use propcrm_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn in_memory_database_is_fully_migrated() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert!(column_names(&conn, "beneficiaries").contains(&"sync_status".to_string()));
}

#[test]
fn reopening_a_file_database_keeps_its_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("propcrm.db");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO beneficiaries (uuid, name)
             VALUES ('00000000-0000-4000-8000-000000000001', 'Owner');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let status: String = second
        .query_row("SELECT sync_status FROM beneficiaries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(status, "PENDING");
}

#[test]
fn version_one_database_is_upgraded_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v1.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE beneficiaries (
            uuid TEXT PRIMARY KEY NOT NULL,
            payprop_id TEXT UNIQUE,
            name TEXT NOT NULL,
            business_name TEXT,
            email TEXT,
            beneficiary_type TEXT,
            account_type TEXT NOT NULL DEFAULT 'INDIVIDUAL',
            payment_method TEXT NOT NULL DEFAULT 'LOCAL',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL DEFAULT 0,
            updated_at INTEGER NOT NULL DEFAULT 0
        );
        INSERT INTO beneficiaries (uuid, name, beneficiary_type)
        VALUES ('00000000-0000-4000-8000-000000000002', 'Legacy', 'AGENCY');
        PRAGMA user_version = 1;",
    )
    .unwrap();
    drop(conn);

    let upgraded = open_db(&path).unwrap();
    assert_eq!(schema_version(&upgraded), latest_version());
    let (kind, status): (String, String) = upgraded
        .query_row(
            "SELECT beneficiary_type, sync_status FROM beneficiaries;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(kind, "AGENCY");
    assert_eq!(status, "PENDING");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .unwrap();
    stmt.query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}
