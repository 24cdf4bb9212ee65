use clap::Parser;
use std::path::PathBuf;
use userbook::cli::parser::{Cli, Commands};
use userbook::config::Config;
use userbook::errors::AppError;
use userbook::utils::path::expand_tilde;

#[test]
fn missing_keys_fall_back_to_defaults() {
    let cfg = Config::from_yaml("database: /tmp/people.db\n").unwrap();
    assert_eq!(cfg.database, "/tmp/people.db");
    assert_eq!(cfg.password_storage, "sha256");
    assert_eq!(cfg.max_insert_retries, 0);
}

#[test]
fn unknown_password_storage_is_rejected() {
    let err = Config::from_yaml("password_storage: md5\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load(Some(dir.path().join("absent.conf").as_path())).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("userbook.conf");

    let cfg = Config {
        database: "people.db".into(),
        password_storage: "plaintext".into(),
        max_insert_retries: 3,
    };
    cfg.save(Some(path.as_path())).unwrap();

    assert_eq!(Config::load(Some(path.as_path())).unwrap(), cfg);
}

#[test]
fn no_arguments_means_no_subcommand() {
    let cli = Cli::try_parse_from(["userbook"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.db.is_none());
}

#[test]
fn global_db_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["userbook", "list", "--db", "/tmp/u.db"]).unwrap();
    assert_eq!(cli.command, Some(Commands::List));
    assert_eq!(cli.db.as_deref(), Some("/tmp/u.db"));
}

#[test]
fn db_flags() {
    let cli = Cli::try_parse_from(["userbook", "db", "--check"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Db {
            check: true,
            info: false
        })
    );
}

#[test]
fn plain_paths_are_untouched() {
    assert_eq!(expand_tilde("users.db"), PathBuf::from("users.db"));
    assert_eq!(
        expand_tilde("/var/lib/users.db"),
        PathBuf::from("/var/lib/users.db")
    );
}

#[test]
fn tilde_is_expanded_to_home() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/data/users.db"), home.join("data/users.db"));
    }
}

#[test]
fn insert_error_carries_name_and_detail() {
    let e = AppError::Insert {
        name: "Ada Lovelace".into(),
        detail: "NOT NULL constraint failed: user.first_name".into(),
    };
    let msg = e.to_string();
    assert!(msg.contains("Ada Lovelace"));
    assert!(msg.contains("NOT NULL constraint failed"));
}

#[test]
fn storage_error_names_the_path() {
    let e = AppError::StorageUnavailable {
        path: "/nowhere/users.db".into(),
        source: rusqlite::Error::InvalidQuery,
    };
    assert!(
        e.to_string()
            .starts_with("Can't open database '/nowhere/users.db'")
    );
}
