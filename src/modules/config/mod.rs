pub mod settings;

pub use settings::{AuthConfig, DuplicatePolicy};
