use thiserror::Error;

use crate::{
    model::account::Role,
    server::{
        error::{domain::UseCaseError, param::AccessDeniedError},
        http::{helper, HttpResponse},
    },
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried neither an `Authorization: Bearer` nor an `x-access-token` header.
    #[error("Request has no access token")]
    MissingAccessToken,

    /// No account holds the presented token, either because it was never issued or
    /// because it was revoked on sign out.
    #[error("No account matches the presented access token")]
    UnknownAccessToken,

    /// Account exists but its role is not among the roles the route allows.
    ///
    /// # Fields
    /// - Account identifier
    /// - Role the account holds
    #[error("Account {0} with role {1:?} is not allowed on this route")]
    AccessDenied(String, Role),

    /// Looking the token up failed.
    #[error(transparent)]
    Lookup(#[from] UseCaseError),
}

impl AuthError {
    /// Converts authentication errors into controller responses.
    ///
    /// Every rejection maps to 403 Forbidden with "Access denied" so clients cannot tell a
    /// missing token from an insufficient role. Lookup failures are internal and map to
    /// 500 with the generic server error body.
    ///
    /// # Returns
    /// - 403 Forbidden - For `MissingAccessToken`, `UnknownAccessToken` and `AccessDenied`
    /// - 500 Internal Server Error - For `Lookup`
    pub fn into_http_response(self) -> HttpResponse {
        match self {
            Self::Lookup(err) => helper::server_error(err),
            err => {
                tracing::debug!("{}", err);
                helper::forbidden(AccessDeniedError)
            }
        }
    }
}
