use log::debug;
use std::collections::HashMap;

use super::error::{AuthError, AuthResult};
use super::password::validate_password;
use crate::modules::config::{AuthConfig, DuplicatePolicy};
use crate::modules::hashing::{hash_password, DigestAlgorithm};
use crate::modules::utils::log_auth_event;

/// In-memory mapping from username to password digest.
///
/// Each store is an isolated value; nothing here is process-global. Mutation
/// takes `&mut self`, so concurrent use goes through
/// [`SharedCredentialStore`](super::shared::SharedCredentialStore).
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
    algorithm: DigestAlgorithm,
    enforce_password_policy: bool,
    duplicate_policy: DuplicatePolicy,
}

impl CredentialStore {
    /// Empty SHA-256 store with no password policy and last-write-wins registration
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with an explicit algorithm and default policies
    pub fn with_algorithm(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Build a store from configuration. Fails if the algorithm name is unknown.
    pub fn with_config(config: &AuthConfig) -> AuthResult<Self> {
        let algorithm = config.digest_algorithm()?;
        debug!(
            "Creating credential store: algorithm={}, password_policy={}, duplicates={:?}",
            algorithm, config.enforce_password_policy, config.duplicate_policy
        );

        Ok(Self {
            users: HashMap::new(),
            algorithm,
            enforce_password_policy: config.enforce_password_policy,
            duplicate_policy: config.duplicate_policy,
        })
    }

    /// Digest a password with this store's algorithm
    pub fn hash(&self, password: &str) -> String {
        hash_password(self.algorithm, password)
    }

    /// Store the digest of `password` under `username`.
    ///
    /// Under the default configuration this always succeeds and overwrites any
    /// existing entry. A rejected registration leaves the store unchanged.
    pub fn register(&mut self, username: &str, password: &str) -> AuthResult<()> {
        if self.enforce_password_policy {
            if let Err(e) = validate_password(password) {
                log_auth_event("register", username, false, Some(&e.to_string()));
                return Err(e.into());
            }
        }

        if self.duplicate_policy == DuplicatePolicy::Reject && self.users.contains_key(username) {
            log_auth_event("register", username, false, Some("duplicate username"));
            return Err(AuthError::UserExists(username.to_string()));
        }

        let digest = self.hash(password);
        let replaced = self.users.insert(username.to_string(), digest).is_some();

        log_auth_event(
            "register",
            username,
            true,
            replaced.then_some("replaced existing digest"),
        );
        Ok(())
    }

    /// Check a password against the stored digest.
    ///
    /// Unknown users and wrong passwords both return `false`, and the log
    /// entry does not say which one happened.
    /// Digests are compared with plain string equality, not in constant time.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let authenticated = match self.users.get(username) {
            Some(stored) => *stored == self.hash(password),
            None => false,
        };

        log_auth_event("authenticate", username, authenticated, None);
        authenticated
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}
