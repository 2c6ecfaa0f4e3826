//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through axum's
//! state extraction. Every field is reference counted, so clones share the same
//! controllers and, through them, the same connection pool.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    factory::{self, Controllers},
    middleware::auth::AuthGuard,
};

#[derive(Clone)]
pub struct AppState {
    /// Controllers the route handlers dispatch to.
    pub controllers: Arc<Controllers>,

    /// Token and role check used by the role middleware.
    pub auth_guard: Arc<AuthGuard>,
}

impl AppState {
    /// Wires every controller and the auth guard against `db`.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        let controllers = Arc::new(Controllers::new(&db));
        let auth_guard = Arc::new(factory::make_auth_guard(&db));

        Self {
            controllers,
            auth_guard,
        }
    }
}
