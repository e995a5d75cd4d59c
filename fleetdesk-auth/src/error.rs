//! Error types for session operations
//!
//! This module defines the errors that can occur while decoding identity
//! claims and building a session principal from them.

use thiserror::Error;

/// Session error types.
///
/// Role strings the catalog does not know are not errors; they are dropped
/// from the principal. These errors cover claims that cannot be trusted at
/// all.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Claims have expired
    #[error("Token has expired")]
    TokenExpired,

    /// Claims are malformed or carry an invalid value
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// Claims are missing a required field
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// Caller does not have the required role or permission
    #[error("Forbidden: insufficient permissions")]
    Forbidden,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for session operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::InvalidClaims(err.to_string())
    }
}

impl From<crate::config::ConfigError> for AuthError {
    fn from(err: crate::config::ConfigError) -> Self {
        AuthError::ConfigError(err.to_string())
    }
}

impl AuthError {
    /// Check if this error should be logged at error level.
    ///
    /// Expired or malformed claims are expected from clients and are not
    /// server faults.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::ConfigError(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::TokenExpired | AuthError::InvalidClaims(_) | AuthError::MissingClaim(_) => {
                401
            }
            AuthError::Forbidden => 403,
            AuthError::ConfigError(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::InvalidClaims(_) => "INVALID_CLAIMS",
            AuthError::MissingClaim(_) => "MISSING_CLAIM",
            AuthError::Forbidden => "FORBIDDEN",
            AuthError::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}
