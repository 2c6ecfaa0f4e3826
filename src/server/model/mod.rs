//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of a
//! single operation.

pub mod account;
pub mod employee;
pub mod entity;
pub mod student;
