use super::*;

fn count(db: &SqliteBackend, sql: &str) -> i64 {
    db.conn().query_row(sql, [], |row| row.get(0)).unwrap()
}

#[test]
fn test_in_memory() {
    let db = SqliteBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "sqlite");
    assert_eq!(db.read_version().unwrap(), 0);
}

#[test]
fn test_execute_batch_multiple_statements() {
    let db = SqliteBackend::in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE t1 (id INTEGER); CREATE TABLE t2 (id INTEGER); INSERT INTO t1 VALUES (1);",
    )
    .unwrap();

    assert_eq!(count(&db, "SELECT COUNT(*) FROM t1"), 1);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM t2"), 0);
}

#[test]
fn test_execute_batch_invalid_sql() {
    let db = SqliteBackend::in_memory().unwrap();
    let err = db.execute_batch("CREATE TABLE (").unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_version_round_trip_through_trait() {
    let db = SqliteBackend::in_memory().unwrap();
    db.write_version(12).unwrap();
    assert_eq!(db.read_version().unwrap(), 12);
}

#[test]
fn test_open_descriptor_memory() {
    let db = SqliteBackend::open(&DatabaseDescriptor::parse(":memory:")).unwrap();
    assert_eq!(db.read_version().unwrap(), 0);
}

#[test]
fn test_open_file_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.db");
    assert!(!path.exists());

    let db = SqliteBackend::open(&DatabaseDescriptor::Path(path.clone())).unwrap();
    db.write_version(2).unwrap();
    db.close().unwrap();

    assert!(path.exists());
    let reopened = SqliteBackend::from_path(&path).unwrap();
    assert_eq!(reopened.read_version().unwrap(), 2);
}

#[test]
fn test_open_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("app.db");

    let err = SqliteBackend::from_path(&path).unwrap_err();
    match err {
        DbError::ConnectionError { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string())
        }
        other => panic!("expected ConnectionError, got {other:?}"),
    }
}

#[test]
fn test_bare_connection_is_a_target() {
    let conn = Connection::open_in_memory().unwrap();
    let target: &dyn MigrationTarget = &conn;
    target.execute_batch("CREATE TABLE t (id INTEGER)").unwrap();
    target.write_version(4).unwrap();
    assert_eq!(target.read_version().unwrap(), 4);
}

#[test]
fn test_from_connection_and_into_inner() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 9").unwrap();

    let db = SqliteBackend::from_connection(conn);
    assert_eq!(db.read_version().unwrap(), 9);

    let conn = db.into_inner();
    let v: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(v, 9);
}

#[test]
fn test_descriptor_parse_and_display() {
    assert_eq!(DatabaseDescriptor::parse(":memory:"), DatabaseDescriptor::Memory);
    assert_eq!(
        DatabaseDescriptor::parse("data/app.db"),
        DatabaseDescriptor::Path("data/app.db".into())
    );
    assert_eq!(DatabaseDescriptor::Memory.to_string(), ":memory:");
}

#[test]
fn test_descriptor_from_config() {
    let config = fm_core::DatabaseConfig {
        path: "app.db".to_string(),
    };
    let descriptor = DatabaseDescriptor::from_config(&config, Path::new("/srv/project"));
    assert_eq!(
        descriptor,
        DatabaseDescriptor::Path("/srv/project/app.db".into())
    );
}
