// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, config, hashing, utils};

// Re-export commonly used types
pub use modules::auth::error::AuthError;
pub use modules::auth::shared::SharedCredentialStore;
pub use modules::auth::store::CredentialStore;
pub use modules::config::settings::{AuthConfig, DuplicatePolicy};
pub use modules::hashing::digest::DigestAlgorithm;

// Constants
pub const DEFAULT_USERNAME: &str = "user1";
pub const DEFAULT_PASSWORD: &str = "password123";
pub const DEFAULT_ALGORITHM: &str = "SHA-256";
pub const PBKDF2_ITERATIONS: u32 = 100_000;
pub const PBKDF2_STATIC_SALT: &[u8] = b"userauth-static-salt";

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
