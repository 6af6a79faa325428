use std::sync::{Arc, Mutex, MutexGuard};

use super::error::AuthResult;
use super::store::CredentialStore;
use crate::modules::config::AuthConfig;
use crate::modules::hashing::DigestAlgorithm;

/// Thread-safe handle over a single [`CredentialStore`].
///
/// One coarse lock is held for the whole of each operation. Clones share the
/// same underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedCredentialStore {
    inner: Arc<Mutex<CredentialStore>>,
}

impl SharedCredentialStore {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn with_config(config: &AuthConfig) -> AuthResult<Self> {
        Ok(Self::new(CredentialStore::with_config(config)?))
    }

    // A panic mid-operation cannot leave the map half-written, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, CredentialStore> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn hash(&self, password: &str) -> String {
        self.lock().hash(password)
    }

    pub fn register(&self, username: &str, password: &str) -> AuthResult<()> {
        self.lock().register(username, password)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.lock().authenticate(username, password)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.lock().contains(username)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.lock().algorithm()
    }
}
