//! Failures produced by use-cases.
//!
//! Every service operation returns `UseCaseError`, which tags whether the failure is a
//! business rule violation (`Domain`) that the client can act on, or an infrastructure
//! failure (`Repository`) that is logged and hidden behind a generic message.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::internal::InternalError;

/// Business rule violations. Controllers answer these with 400 Bad Request and the
/// error message as body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The targeted record does not exist.
    ///
    /// # Fields
    /// - Name of the resource, rendered as "`{0}` not found"
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Another record already uses this email address.
    #[error("Email already in use")]
    EmailInUse,

    /// Email unknown or password mismatch during sign in.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] DbErr),

    /// Failure outside the database, such as password hashing.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl UseCaseError {
    /// Shorthand for the not found variant used by update and delete use-cases.
    pub fn not_found(resource: &'static str) -> Self {
        Self::Domain(DomainError::NotFound(resource))
    }

    /// Classifies a failed insert or update.
    ///
    /// Email is the only unique column a create or update can write, so a unique index
    /// hit means a concurrent request claimed the email between the lookup and the write.
    ///
    /// # Returns
    /// - `UseCaseError::Domain(EmailInUse)` - The write hit a unique constraint
    /// - `UseCaseError::Repository` - Any other database error
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::EmailInUse.into(),
            _ => Self::Repository(err),
        }
    }
}
