pub mod digest;

pub use digest::{hash_password, DigestAlgorithm};
