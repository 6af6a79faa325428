use pbkdf2::pbkdf2;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;

use crate::modules::auth::error::AuthError;
use crate::{HmacSha256, PBKDF2_ITERATIONS, PBKDF2_STATIC_SALT};

/// Digest algorithms a store can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha512,
    /// PBKDF2-HMAC-SHA256 under one application-wide salt, so output stays deterministic
    Pbkdf2Sha256,
}

impl DigestAlgorithm {
    /// Resolve a configured algorithm name, ignoring case, `-` and `_`
    pub fn from_name(name: &str) -> Result<Self, AuthError> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "pbkdf2sha256" => Ok(Self::Pbkdf2Sha256),
            _ => Err(AuthError::AlgorithmUnavailable(name.to_string())),
        }
    }

    /// Canonical name used in config files and log output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
            Self::Pbkdf2Sha256 => "PBKDF2-SHA256",
        }
    }

    /// Length of the hex-encoded digest
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Sha256 | Self::Pbkdf2Sha256 => 64,
            Self::Sha512 => 128,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash a password into a lowercase hex digest.
///
/// There is no per-user salt: two users with the same password end up with
/// the same digest.
pub fn hash_password(algorithm: DigestAlgorithm, password: &str) -> String {
    match algorithm {
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(password.as_bytes())),
        DigestAlgorithm::Sha512 => hex::encode(Sha512::digest(password.as_bytes())),
        DigestAlgorithm::Pbkdf2Sha256 => {
            let mut key = vec![0u8; 32];
            pbkdf2::<HmacSha256>(
                password.as_bytes(),
                PBKDF2_STATIC_SALT,
                PBKDF2_ITERATIONS,
                &mut key,
            );
            hex::encode(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sha256_digest() {
        assert_eq!(
            hash_password(DigestAlgorithm::Sha256, "password123"),
            "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
        );
    }

    #[test]
    fn test_known_sha512_digest() {
        assert_eq!(
            hash_password(DigestAlgorithm::Sha512, "password123"),
            "bed4efa1d4fdbd954bd3705d6a2a78270ec9a52ecfbfb010c61862af5c76af17\
             61ffeb1aef6aca1bf5d02b3781aa854fabd2b69c790de74e17ecfec3cb6ac4bf"
        );
    }

    #[test]
    fn test_known_pbkdf2_digest() {
        assert_eq!(
            hash_password(DigestAlgorithm::Pbkdf2Sha256, "password123"),
            "70cede008892399249c039248fd6bcce611d2d79f00dd82f3b02fa00c530e393"
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        for algorithm in [
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha512,
            DigestAlgorithm::Pbkdf2Sha256,
        ] {
            let first = hash_password(algorithm, "MySecurePassword123!");
            let second = hash_password(algorithm, "MySecurePassword123!");
            assert_eq!(first, second);

            let different = hash_password(algorithm, "DifferentPassword456!");
            assert_ne!(first, different);
        }
    }

    #[test]
    fn test_hex_output_shape() {
        for algorithm in [
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha512,
            DigestAlgorithm::Pbkdf2Sha256,
        ] {
            for password in ["", "a", "password123", "pässwörd with spaces"] {
                let digest = hash_password(algorithm, password);
                assert_eq!(digest.len(), algorithm.hex_len());
                assert!(digest
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            }
        }
    }

    #[test]
    fn test_algorithm_name_resolution() {
        assert_eq!(
            DigestAlgorithm::from_name("SHA-256").unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!(
            DigestAlgorithm::from_name("sha_256").unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!(
            DigestAlgorithm::from_name("Sha512").unwrap(),
            DigestAlgorithm::Sha512
        );
        assert_eq!(
            DigestAlgorithm::from_name("pbkdf2-sha256").unwrap(),
            DigestAlgorithm::Pbkdf2Sha256
        );

        // Canonical names round back to the same variant
        let algorithm = DigestAlgorithm::Sha512;
        assert_eq!(DigestAlgorithm::from_name(algorithm.name()).unwrap(), algorithm);
    }

    #[test]
    fn test_unknown_algorithm_is_unavailable() {
        match DigestAlgorithm::from_name("MD5") {
            Err(AuthError::AlgorithmUnavailable(name)) => assert_eq!(name, "MD5"),
            other => panic!("expected AlgorithmUnavailable, got {:?}", other),
        }
        assert!(DigestAlgorithm::from_name("").is_err());
        // Only case, `-` and `_` are ignored; surrounding whitespace is not
        assert_eq!(
            DigestAlgorithm::from_name(" sha256 "),
            Err(AuthError::AlgorithmUnavailable(" sha256 ".to_string()))
        );
    }
}
