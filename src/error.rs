//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ValidationError;

/// Errors raised while configuring the logging system.
///
/// Emission itself never fails; these only come from setup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("logging system was already bootstrapped")]
    AlreadyBootstrapped,

    #[error("global logger label was already set")]
    LabelAlreadySet,

    #[error("failed to install subscriber: {0}")]
    Subscriber(String),

    #[error("config watch error: {0}")]
    Watch(#[from] notify::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
