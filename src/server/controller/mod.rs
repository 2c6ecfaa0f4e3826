//! Controllers: one struct per exposed operation.
//!
//! Each controller validates the `HttpRequest`, converts the body DTO into a server
//! parameter, invokes exactly one use-case and maps the outcome onto an `HttpResponse`.
//! Controllers do not know about axum; the route handlers in `router` feed them.
//!
//! Validation order is fixed: path parameters, then required body fields, then body
//! deserialization, then field-level checks such as email format.

pub mod account;
pub mod auth;
pub mod employee;
pub mod student;

#[cfg(test)]
mod test;

use crate::server::http::HttpResponse;

/// Runs a fallible controller body where early returns carry the response.
pub(crate) fn respond(result: Result<HttpResponse, HttpResponse>) -> HttpResponse {
    match result {
        Ok(response) | Err(response) => response,
    }
}
