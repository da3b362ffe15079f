use std::path::PathBuf;

use aw_core::AwError;
use aw_scheme::SchemeError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed pole reference '{label}', expected ELEMENT.POLE")]
    BadLabel { label: String },

    #[error("Unknown pole reference '{label}'")]
    UnknownPole { label: String },

    #[error("Element '{tag}' is declared more than once")]
    DuplicateElement { tag: String },

    #[error(transparent)]
    Wiring(#[from] AwError),
}

impl From<SchemeError> for CliError {
    fn from(err: SchemeError) -> Self {
        CliError::Wiring(err.into())
    }
}
