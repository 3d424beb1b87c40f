use std::path::PathBuf;

use pacul::config::{Config, ConfigError};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_database_path_is_required() {
    assert_eq!(
        Config::from_args(args(&[]), None),
        Err(ConfigError::MissingDatabasePath)
    );
}

#[test]
fn test_database_path_and_history() {
    let config = Config::from_args(args(&["my.db", "--history", "hist.txt"]), None).unwrap();
    assert_eq!(config.db_path, PathBuf::from("my.db"));
    assert_eq!(config.history_file, Some(PathBuf::from("hist.txt")));

    let config = Config::from_args(args(&["--history", "hist.txt", "other.db"]), None).unwrap();
    assert_eq!(config.db_path, PathBuf::from("other.db"));
}

#[test]
fn test_history_default() {
    let config = Config::from_args(args(&["my.db"]), None).unwrap();
    assert_eq!(config.history_file, None);

    let config = Config::from_args(args(&["my.db"]), Some(PathBuf::from("env.txt"))).unwrap();
    assert_eq!(config.history_file, Some(PathBuf::from("env.txt")));

    // The flag wins over the default
    let config = Config::from_args(
        args(&["my.db", "--history", "flag.txt"]),
        Some(PathBuf::from("env.txt")),
    )
    .unwrap();
    assert_eq!(config.history_file, Some(PathBuf::from("flag.txt")));
}

#[test]
fn test_bad_flags() {
    assert_eq!(
        Config::from_args(args(&["my.db", "--history"]), None),
        Err(ConfigError::MissingFlagValue("--history".to_string()))
    );
    assert_eq!(
        Config::from_args(args(&["my.db", "--verbose"]), None),
        Err(ConfigError::UnknownFlag("--verbose".to_string()))
    );
}

#[test]
fn test_second_positional_argument() {
    assert_eq!(
        Config::from_args(args(&["one.db", "two.db"]), None),
        Err(ConfigError::UnexpectedArgument("two.db".to_string()))
    );
}
