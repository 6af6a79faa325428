use std::io;
use thiserror::Error;

/// Reasons a password fails the optional strength policy
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password must be at least 8 characters")]
    TooShort,
    #[error("password must contain an uppercase letter")]
    NoUppercase,
    #[error("password must contain a lowercase letter")]
    NoLowercase,
    #[error("password must contain a number")]
    NoNumber,
    #[error("password must contain a special character")]
    NoSpecialChar,
}

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Check password strength. Only consulted when the store enables the policy.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < 8 {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordError::NoUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(PasswordError::NoLowercase);
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err(PasswordError::NoNumber);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(PasswordError::NoSpecialChar);
    }
    Ok(())
}

/// Helper function to read a password without echoing it
pub fn read_password() -> io::Result<String> {
    rpassword::read_password()
}
