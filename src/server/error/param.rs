//! Client-facing errors produced at the controller boundary.
//!
//! Each type renders the exact message returned in the `error` field of the response body.

use thiserror::Error;

/// A required request field is absent or falsy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing param: {0}")]
pub struct MissingParamError(pub String);

/// A request field is present but unacceptable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid param: {0}")]
pub struct InvalidParamError(pub String);

/// Generic message sent in place of any unexpected failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Internal server error")]
pub struct ServerError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Access denied")]
pub struct AccessDeniedError;

impl MissingParamError {
    pub fn new(field: impl Into<String>) -> Self {
        Self(field.into())
    }
}

impl InvalidParamError {
    pub fn new(field: impl Into<String>) -> Self {
        Self(field.into())
    }
}
