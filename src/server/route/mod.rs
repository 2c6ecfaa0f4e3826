//! Axum route handlers.
//!
//! Each handler extracts the transport-neutral `HttpRequest`, forwards it to the matching
//! controller held in `AppState` and converts the `HttpResponse` back. Access control is
//! applied in `router`, not here. The `#[utoipa::path]` annotations feed the OpenAPI
//! document in `doc`.

pub mod account;
pub mod auth;
pub mod employee;
pub mod student;
