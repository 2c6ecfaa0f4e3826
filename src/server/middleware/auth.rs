use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    model::account::Role,
    server::{
        error::auth::AuthError, http::adapter, model::account::Account,
        service::auth::LoadAccountByToken,
    },
};

/// Resolves an access token to an account and checks its role.
pub struct AuthGuard {
    load_account_by_token: Arc<dyn LoadAccountByToken>,
}

impl AuthGuard {
    pub fn new(load_account_by_token: Arc<dyn LoadAccountByToken>) -> Self {
        Self {
            load_account_by_token,
        }
    }

    /// Requires a token belonging to an account whose role is one of `roles`.
    ///
    /// # Arguments
    /// - `access_token` - Token presented by the request, if any
    /// - `roles` - Roles allowed through; any one of them is enough
    ///
    /// # Returns
    /// - `Ok(Account)` - The authenticated account
    /// - `Err(AuthError::MissingAccessToken)` - No token presented
    /// - `Err(AuthError::UnknownAccessToken)` - Token not held by any account
    /// - `Err(AuthError::AccessDenied)` - Account role not in `roles`
    /// - `Err(AuthError::Lookup)` - Repository failure while resolving the token
    pub async fn require(
        &self,
        access_token: Option<&str>,
        roles: &[Role],
    ) -> Result<Account, AuthError> {
        let Some(token) = access_token else {
            return Err(AuthError::MissingAccessToken);
        };

        let Some(account) = self.load_account_by_token.execute(token).await? else {
            return Err(AuthError::UnknownAccessToken);
        };

        let role = account.props().role;
        if !roles.contains(&role) {
            return Err(AuthError::AccessDenied(account.id().to_string(), role));
        }

        Ok(account)
    }
}

/// Middleware state pairing the guard with the roles one route accepts.
#[derive(Clone)]
pub struct RoleGate {
    guard: Arc<AuthGuard>,
    roles: &'static [Role],
}

impl RoleGate {
    pub fn new(guard: Arc<AuthGuard>, roles: &'static [Role]) -> Self {
        Self { guard, roles }
    }
}

/// Rejects the request with 403 unless the presented token passes `RoleGate`.
pub async fn require_roles(State(gate): State<RoleGate>, request: Request, next: Next) -> Response {
    let token = adapter::access_token(request.headers());

    match gate.guard.require(token.as_deref(), gate.roles).await {
        Ok(_) => next.run(request).await,
        Err(err) => err.into_http_response().into_response(),
    }
}
