use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        account::AccountDto,
        api::ErrorDto,
        auth::{AccessTokenDto, SignInDto, SignUpDto},
    },
    server::{http::HttpRequest, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new `USER` account.
///
/// # Returns
/// - `200 OK` - The created account
/// - `400 Bad Request` - Missing or invalid field, or email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/sign-up",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 200, description = "Account created", body = AccountDto),
        (status = 400, description = "Missing or invalid param, or email in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(State(state): State<AppState>, request: HttpRequest) -> Response {
    state.controllers.sign_up.handle(request).await.into_response()
}

/// Exchange credentials for an access token.
///
/// Signing in again replaces the previously issued token.
///
/// # Returns
/// - `200 OK` - `{ "accessToken": "..." }`
/// - `400 Bad Request` - Missing field or invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/sign-in",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = AccessTokenDto),
        (status = 400, description = "Missing param or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(State(state): State<AppState>, request: HttpRequest) -> Response {
    state.controllers.sign_in.handle(request).await.into_response()
}

/// Revoke the caller's access token.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    post,
    path = "/api/sign-out",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out"),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn sign_out(State(state): State<AppState>, request: HttpRequest) -> Response {
    state.controllers.sign_out.handle(request).await.into_response()
}
