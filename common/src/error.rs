use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading a chain definition file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing key `{0}`")]
    Missing(&'static str),

    #[error("`{key}` must be a {expected}")]
    InvalidType { key: String, expected: &'static str },

    #[error("`{0}` must not be empty")]
    Empty(&'static str),

    #[error("entry {entry} is out of range for a chain of {len} handlers")]
    EntryOutOfRange { entry: usize, len: usize },
}

/// Errors from setting up the global logger.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("unknown log level `{0}`")]
    Level(String),

    #[error("failed to open log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logger already initialized: {0}")]
    Init(#[from] log::SetLoggerError),
}
