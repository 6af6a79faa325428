use thiserror::Error;

use super::password::PasswordError;

/// Errors surfaced by the credential store and its configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The configured digest algorithm is not one this build provides
    #[error("Hash algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),

    /// Only raised when the password policy is enabled
    #[error("Password rejected by policy: {0}")]
    WeakPassword(#[from] PasswordError),

    /// Only raised under the reject-duplicates policy
    #[error("Username already exists: {0}")]
    UserExists(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the crate
pub type AuthResult<T> = std::result::Result<T, AuthError>;
