use std::sync::Arc;

use crate::server::{
    error::{
        domain::{DomainError, UseCaseError},
        internal::InternalError,
    },
    util::{encrypter::Encrypter, token::TokenGenerator},
};


/// Marks passwords as hashed without randomness so tests can assert on the stored value.
struct PrefixEncrypter;

impl Encrypter for PrefixEncrypter {
    fn encrypt(&self, plain: &str) -> Result<String, InternalError> {
        Ok(format!("hashed:{}", plain))
    }

    fn compare(&self, plain: &str, hashed: &str) -> bool {
        hashed.strip_prefix("hashed:") == Some(plain)
    }
}

struct FixedTokenGenerator(&'static str);

impl TokenGenerator for FixedTokenGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

fn encrypter() -> Arc<dyn Encrypter> {
    Arc::new(PrefixEncrypter)
}

fn is_domain(result: Result<impl Sized, UseCaseError>, expected: DomainError) -> bool {
    matches!(result, Err(UseCaseError::Domain(err)) if err == expected)
}
