use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a builder session.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Layered configuration could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The pool catalog could not be loaded.
    #[error("Failed to load catalog from {path}: {reason:#}")]
    Catalog { path: PathBuf, reason: anyhow::Error },

    /// Underlying IO failure on the session streams.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in a single session command line. The session reports them and continues.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

/// A specialized Result type for builder setup.
pub type Result<T> = std::result::Result<T, BuilderError>;
