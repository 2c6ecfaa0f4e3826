//! Error types and HTTP response handling.
//!
//! The `AppError` enum is the top-level error for process startup and wiring. Request
//! handling uses narrower types: `UseCaseError` carries failures out of the service layer,
//! the `param` module holds the error bodies controllers hand back to clients, and
//! `AuthError` covers access control.

pub mod auth;
pub mod config;
pub mod domain;
pub mod internal;
pub mod param;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Returned from startup and `main`; every variant is fatal for the process.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM, including failed migrations.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A use-case failed while bootstrapping application data.
    #[error(transparent)]
    UseCaseErr(#[from] domain::UseCaseError),
}
