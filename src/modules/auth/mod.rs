pub mod error;
pub mod password;
pub mod shared;
pub mod store;

// Re-export the main types and functions
pub use error::AuthError;
pub use password::{read_password, validate_password, PasswordError};
pub use shared::SharedCredentialStore;
pub use store::CredentialStore;
