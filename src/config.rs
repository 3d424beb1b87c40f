use std::path::PathBuf;

pub const HISTORY_ENV: &str = "PACUL_HISTORY";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Must supply a database filename.")]
    MissingDatabasePath,
    #[error("Missing value for flag '{0}'")]
    MissingFlagValue(String),
    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Parses arguments without the program name:
    /// `<db-file> [--history <file>]`. `default_history` applies when no
    /// `--history` flag is given.
    pub fn from_args<I>(args: I, default_history: Option<PathBuf>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut db_path = None;
        let mut history_file = default_history;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--history" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingFlagValue(arg.clone()))?;
                    history_file = Some(PathBuf::from(value));
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ if db_path.is_none() => db_path = Some(PathBuf::from(&arg)),
                _ => return Err(ConfigError::UnexpectedArgument(arg.clone())),
            }
        }

        Ok(Self {
            db_path: db_path.ok_or(ConfigError::MissingDatabasePath)?,
            history_file,
        })
    }
}
