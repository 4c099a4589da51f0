use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum OuiError {
    #[error("failed to read input file {path}: {message}")]
    InputRead { path: Utf8PathBuf, message: String },

    #[error("OUI download failed: {0}")]
    Http(String),

    #[error("OUI source returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("input CSV is empty")]
    EmptyInput,

    #[error("invalid OUI assignment: {0}")]
    InvalidAssignment(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
