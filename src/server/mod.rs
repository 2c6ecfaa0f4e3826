//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations over
//! SQLite.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Route Layer** (`route/`) - Axum handlers that hand requests to controllers
//! - **HTTP Layer** (`http/`) - Transport-neutral request/response types and the axum adapter
//! - **Controller Layer** (`controller/`) - Request validation and error-to-status mapping
//! - **Service Layer** (`service/`) - One use-case per operation, coordinating repositories
//! - **Data Layer** (`data/`) - Repository traits, SeaORM implementations and entity conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application, domain and client-facing error types
//! - **Middleware** (`middleware/`) - Access token and role checks
//! - **Utilities** (`util/`) - Password hashing, token generation and email validation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Factory** (`factory`) - Wiring of controllers, use-cases and repositories
//! - **State** (`state`) - Shared application state (controllers, auth guard)
//! - **Startup** (`startup`) - Tracing, database connection and admin bootstrap
//! - **Router** (`router`) - Route table, role gates and API documentation (`doc`)
//!
//! # Request Flow
//!
//! 1. **Router** matches the path and runs the role middleware for gated routes
//! 2. **Route** handler extracts an `HttpRequest` and calls its controller
//! 3. **Controller** validates params and body, converts DTOs to params, calls a use-case
//! 4. **Service** checks business rules and calls the repository
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the result or error into an `HttpResponse`

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod factory;
pub mod http;
pub mod middleware;
pub mod model;
pub mod route;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
