use super::*;

fn memory() -> Connection {
    Connection::open_in_memory().unwrap()
}

#[test]
fn test_fresh_database_reads_zero() {
    let conn = memory();
    assert_eq!(read_version(&conn).unwrap(), 0);
}

#[test]
fn test_sequential_writes_are_observable() {
    let conn = memory();
    for v in [1, 5, 10] {
        write_version(&conn, v).unwrap();
        assert_eq!(read_version(&conn).unwrap(), v);
    }
}

#[test]
fn test_write_max_version() {
    let conn = memory();
    write_version(&conn, MAX_VERSION).unwrap();
    assert_eq!(read_version(&conn).unwrap(), MAX_VERSION);
}

#[test]
fn test_write_above_max_is_rejected() {
    let conn = memory();
    write_version(&conn, 3).unwrap();

    let err = write_version(&conn, MAX_VERSION + 1).unwrap_err();
    assert!(matches!(err, DbError::InvalidVersion { .. }));
    assert_eq!(read_version(&conn).unwrap(), 3);
}

#[test]
fn test_negative_stored_version_is_rejected() {
    let conn = memory();
    conn.execute_batch("PRAGMA user_version = -4").unwrap();

    let err = read_version(&conn).unwrap_err();
    match err {
        DbError::InvalidVersion { value, .. } => assert_eq!(value, -4),
        other => panic!("expected InvalidVersion, got {other:?}"),
    }
}

#[test]
fn test_version_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.db");
    {
        let conn = Connection::open(&path).unwrap();
        write_version(&conn, 7).unwrap();
    }
    let conn = Connection::open(&path).unwrap();
    assert_eq!(read_version(&conn).unwrap(), 7);
}
