use argon2::{
    password_hash::{phc::PasswordHash, PasswordHasher, PasswordVerifier},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Argon2id password encoder.
///
/// Constructed once at startup and handed to the services that need it,
/// rather than reached for through a global.
#[derive(Clone, Default)]
pub struct PasswordEncoder {
    argon2: Argon2<'static>,
}

impl PasswordEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a plain text password with a fresh random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let hash = self
            .argon2
            .hash_password(password.as_bytes())
            .map_err(|e| AppError::Internal {
                source: anyhow::anyhow!("Failed to hash password: {}", e),
            })?;
        Ok(hash.to_string())
    }

    /// Verifies a plain text password against a stored hash.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("Stored password hash is malformed: {}", e),
        })?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_produces_argon2_phc_string() {
        let encoder = PasswordEncoder::new();
        let hash = encoder.hash("pw1").expect("Failed to hash password");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn verify_accepts_matching_password() {
        let encoder = PasswordEncoder::new();
        let hash = encoder.hash("pw1").unwrap();
        assert!(encoder.verify("pw1", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let encoder = PasswordEncoder::new();
        let hash = encoder.hash("pw1").unwrap();
        assert!(!encoder.verify("pw2", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let encoder = PasswordEncoder::new();
        let first = encoder.hash("pw1").unwrap();
        let second = encoder.hash("pw1").unwrap();
        assert_ne!(first, second);
        assert!(encoder.verify("pw1", &first).unwrap());
        assert!(encoder.verify("pw1", &second).unwrap());
    }
}
