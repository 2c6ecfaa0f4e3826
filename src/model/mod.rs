//! Request and response DTOs shared by the HTTP surface.
//!
//! These types describe the JSON accepted and returned by the API and derive `ToSchema`
//! for the OpenAPI document. Server-side domain models live in `server::model` and are
//! converted to and from these DTOs at the controller boundary.

pub mod account;
pub mod api;
pub mod auth;
pub mod employee;
pub mod student;
