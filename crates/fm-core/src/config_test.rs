use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_minimal_config() {
    let config: Config = serde_yaml::from_str("migrations_path: db/migrations").unwrap();
    assert_eq!(config.migrations_path, "db/migrations");
    assert_eq!(config.database.path, "app.db");
    assert!(config.targets.is_empty());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
database:
  path: "./data/app.sqlite"
migrations_path: sql
targets:
  test:
    database:
      path: ":memory:"
  prod:
    database:
      path: /var/lib/app/app.db
    migrations_path: /opt/app/migrations
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.database.path, "./data/app.sqlite");
    assert_eq!(config.targets.len(), 2);
    assert!(config.database_for(Some("test")).unwrap().is_memory());
    assert_eq!(
        config.migrations_path_for(Some("prod")).unwrap(),
        "/opt/app/migrations"
    );
    assert_eq!(config.migrations_path_for(Some("test")).unwrap(), "sql");
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("migration_path: typo");
    assert!(result.is_err());
}

#[test]
fn test_unknown_target() {
    let config: Config = serde_yaml::from_str("targets:\n  dev: {}\n").unwrap();
    let err = config.database_for(Some("prod")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
    assert!(err.to_string().contains("available: dev"));
}

#[test]
fn test_target_without_override_falls_back() {
    let config: Config = serde_yaml::from_str("targets:\n  dev: {}\n").unwrap();
    assert_eq!(config.database_for(Some("dev")).unwrap(), config.database);
    assert_eq!(config.database_for(None).unwrap(), config.database);
}

#[test]
fn test_path_absolute() {
    let root = Path::new("/srv/project");
    let relative = DatabaseConfig {
        path: "app.db".to_string(),
    };
    let absolute = DatabaseConfig {
        path: "/tmp/app.db".to_string(),
    };
    let memory = DatabaseConfig {
        path: MEMORY_DATABASE.to_string(),
    };
    assert_eq!(relative.path_absolute(root), "/srv/project/app.db");
    assert_eq!(absolute.path_absolute(root), "/tmp/app.db");
    assert_eq!(memory.path_absolute(root), ":memory:");
}

#[test]
fn test_migrations_path_absolute() {
    let config = Config::default();
    assert_eq!(
        config.migrations_path_absolute(Path::new("/srv/project")),
        PathBuf::from("/srv/project/migrations")
    );
}

#[test]
fn test_load_from_dir_yml_and_yaml() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("foldermig.yaml"), "migrations_path: m\n").unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.migrations_path, "m");

    fs::write(dir.path().join("foldermig.yml"), "migrations_path: first\n").unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.migrations_path, "first");
}

#[test]
fn test_load_from_dir_missing() {
    let dir = tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(dir.path()).unwrap();
    assert_eq!(config.migrations_path, "migrations");
    assert_eq!(config.database.path, "app.db");
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("foldermig.yml");
    fs::write(&path, "\n").unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.migrations_path, "migrations");
}

#[test]
fn test_load_invalid_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("foldermig.yml");
    fs::write(&path, "database: [not, a, map").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_load_rejects_empty_paths() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("foldermig.yml");

    fs::write(&path, "migrations_path: \"\"\n").unwrap();
    assert!(matches!(
        Config::load(&path).unwrap_err(),
        CoreError::ConfigInvalid { .. }
    ));

    fs::write(&path, "targets:\n  prod:\n    database:\n      path: \"\"\n").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("prod"));
}
