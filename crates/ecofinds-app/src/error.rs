//! Error types for the application layer.

use ecofinds_market::MarketError;
use ecofinds_session::{SessionError, UploadError};
use thiserror::Error;

/// Errors that can occur while dispatching commands or starting up.
///
/// Command failures display the message of the underlying store error, which
/// is what gets shown to the user.
#[derive(Error, Debug)]
pub enum AppError {
    /// Catalog, cart or ledger rejected the command.
    #[error(transparent)]
    Market(#[from] MarketError),

    /// The command needs a logged-in user.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Profile picture upload failed.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Screen name not recognized.
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// Check if the command was rejected for bad input (a form field or a
    /// picked file), as opposed to a missing login or a failed read.
    pub fn is_validation(&self) -> bool {
        match self {
            AppError::Market(err) => err.is_validation(),
            AppError::Upload(err) => err.is_validation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_validation() {
        assert!(AppError::from(MarketError::MissingField("title")).is_validation());
        assert!(AppError::from(UploadError::NotAnImage("text/plain".into())).is_validation());
        assert!(!AppError::from(MarketError::EmptyCart).is_validation());
        assert!(!AppError::from(UploadError::Read("gone".into())).is_validation());
        assert!(!AppError::from(SessionError::NotLoggedIn).is_validation());
    }
}
