use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_migrate_with_globals() {
    let cli = Cli::try_parse_from([
        "fm",
        "migrate",
        "--database",
        ":memory:",
        "-m",
        "db/migrations",
        "--verbose",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Migrate));
    assert!(cli.global.verbose);
    assert_eq!(cli.global.database.as_deref(), Some(":memory:"));
    assert_eq!(
        cli.global.migrations,
        Some(PathBuf::from("db/migrations"))
    );
    assert_eq!(cli.global.project_dir, PathBuf::from("."));
}

#[test]
fn test_parse_status_json_check() {
    let cli = Cli::try_parse_from(["fm", "status", "-o", "json", "--check"]).unwrap();
    match cli.command {
        Commands::Status(args) => {
            assert_eq!(args.output, OutputFormat::Json);
            assert!(args.check);
        }
        other => panic!("expected status, got {other:?}"),
    }
}

#[test]
fn test_plan_defaults_to_table() {
    let cli = Cli::try_parse_from(["fm", "plan", "--target", "prod"]).unwrap();
    assert_eq!(cli.global.target.as_deref(), Some("prod"));
    match cli.command {
        Commands::Plan(args) => assert_eq!(args.output, OutputFormat::Table),
        other => panic!("expected plan, got {other:?}"),
    }
}

#[test]
fn test_unknown_output_rejected() {
    assert!(Cli::try_parse_from(["fm", "status", "--output", "yaml"]).is_err());
}
