//! Password hashing.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), so
//! the parameters and salt travel with every stored password and verification reads them
//! back from the hash itself.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

const SALT_LEN: usize = 16;

pub trait Encrypter: Send + Sync {
    /// Hashes a plain text value.
    ///
    /// # Returns
    /// - `Ok(String)` - The hash to store
    /// - `Err(InternalError::PasswordHash)` - The hasher rejected its input or parameters
    fn encrypt(&self, plain: &str) -> Result<String, InternalError>;

    /// Checks a plain text value against a hash produced by `encrypt`.
    fn compare(&self, plain: &str, hashed: &str) -> bool;
}

/// Argon2id with the crate's default cost parameters.
#[derive(Clone, Default)]
pub struct Argon2Encrypter {
    argon2: Argon2<'static>,
}

impl Encrypter for Argon2Encrypter {
    fn encrypt(&self, plain: &str) -> Result<String, InternalError> {
        let salt: [u8; SALT_LEN] = rand::random();
        let salt = SaltString::encode_b64(&salt)
            .map_err(|err| InternalError::PasswordHash(err.to_string()))?;

        let hash = self
            .argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|err| InternalError::PasswordHash(err.to_string()))?;

        Ok(hash.to_string())
    }

    /// Anything that does not parse as a PHC string never verifies.
    fn compare(&self, plain: &str, hashed: &str) -> bool {
        let Ok(hash) = PasswordHash::new(hashed) else {
            return false;
        };

        self.argon2
            .verify_password(plain.as_bytes(), &hash)
            .is_ok()
    }
}
