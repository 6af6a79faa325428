use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::modules::auth::error::{AuthError, AuthResult};
use crate::modules::hashing::DigestAlgorithm;
use crate::DEFAULT_ALGORITHM;

/// What `register` does when the username is already present
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the stored digest (last registration wins)
    #[default]
    Overwrite,
    /// Keep the first digest and fail the new registration
    Reject,
}

/// Settings for the credential store and the demo binary
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    pub algorithm: String,
    pub enforce_password_policy: bool,
    pub duplicate_policy: DuplicatePolicy,
    pub thread_safe: bool,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            enforce_password_policy: false,
            duplicate_policy: DuplicatePolicy::Overwrite,
            thread_safe: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AuthConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> AuthResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| AuthError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&data)
            .map_err(|e| AuthError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Resolve the configured algorithm name
    pub fn digest_algorithm(&self) -> AuthResult<DigestAlgorithm> {
        DigestAlgorithm::from_name(&self.algorithm)
    }
}
