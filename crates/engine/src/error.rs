//! The module contains the errors the engine can throw.
//!
//! User input never produces an error: invalid amounts, unknown categories and
//! out-of-range removals are normalized or skipped by the engine itself. The
//! errors below cover the few fallible edges left:
//!
//! - [`AuthError`] returned by an [`Authenticator`] when the credential gate rejects a login.
//! - [`EngineError`] for exports, invalid engine setup and unknown category
//!   labels passed to `Category::try_from`.
//!
//!  [`Authenticator`]: super::auth::Authenticator
use thiserror::Error;

/// Credential gate failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" is not a category")]
    UnknownCategory(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Export failed: {0}")]
    Export(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnknownCategory(a), Self::UnknownCategory(b)) => a == b,
            (Self::InvalidConfig(a), Self::InvalidConfig(b)) => a == b,
            (Self::Export(a), Self::Export(b)) => a == b,
            _ => false,
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}
