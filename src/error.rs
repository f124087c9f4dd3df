use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::client::ServiceError;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {path}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Parser service setup failed: {0}")]
    Service(#[from] ServiceError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
