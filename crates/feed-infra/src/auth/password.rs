//! Argon2 password hashing implementation.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use feed_core::ports::{AuthError, PasswordService};

/// Argon2-based password service with a fresh salt per hash.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("pass1").unwrap();
        assert!(service.verify("pass1", &hash).unwrap());
        assert!(!service.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let service = Argon2PasswordService::new();
        assert_ne!(
            service.hash("pass1").unwrap(),
            service.hash("pass1").unwrap()
        );
    }

    #[test]
    fn garbage_hash_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(matches!(
            service.verify("pass1", "not-a-phc-string"),
            Err(AuthError::Hashing(_))
        ));
    }
}
