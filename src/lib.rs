pub mod config;
pub mod session;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DeckError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Session controller error: {0}")]
    ControllerError(String),
}

impl From<std::io::Error> for DeckError {
    fn from(e: std::io::Error) -> Self {
        DeckError::IoError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
