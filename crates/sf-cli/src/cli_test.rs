use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_apply_parses_file_and_tables() {
    let cli = Cli::try_parse_from(["sf", "apply", "migration.sql", "--tables", "a,b"]).unwrap();
    match cli.command {
        Commands::Apply(args) => {
            assert_eq!(args.file, "migration.sql");
            assert_eq!(args.tables.as_deref(), Some("a,b"));
            assert!(!args.no_verify);
            assert!(!args.quiet);
        }
        _ => panic!("expected apply"),
    }
}

#[test]
fn test_global_flags_anywhere() {
    let cli = Cli::try_parse_from([
        "sf",
        "verify",
        "--url",
        "https://abcd1234.supabase.co",
        "--service-key",
        "key",
        "-v",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.url.as_deref(), Some("https://abcd1234.supabase.co"));
    assert_eq!(cli.global.service_key.as_deref(), Some("key"));
}

#[test]
fn test_split_requires_file() {
    assert!(Cli::try_parse_from(["sf", "split"]).is_err());
}
