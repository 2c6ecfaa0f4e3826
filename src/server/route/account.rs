use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        account::{AccountDto, CreateAccountDto, UpdateAccountDto},
        api::ErrorDto,
    },
    server::{http::HttpRequest, state::AppState},
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "usuarios";

/// Create an account.
///
/// # Access Control
/// - `ADMIN`
///
/// # Returns
/// - `201 Created` - Account created, empty body
/// - `400 Bad Request` - Missing or invalid field, or email already in use
/// - `403 Forbidden` - No valid access token or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/usuarios",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Missing or invalid param, or email in use", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_account(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .create_account
        .handle(request)
        .await
        .into_response()
}

/// List every account.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<AccountDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_accounts(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .get_accounts
        .handle(request)
        .await
        .into_response()
}

/// Get an account by its identifier.
///
/// Responds with `null` when no account matches.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = String, Path, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Account or null", body = Option<AccountDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_account_by_id(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .get_account_by_id
        .handle(request)
        .await
        .into_response()
}

/// Get an account by its email address.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    get,
    path = "/api/usuarios/email/{email}",
    tag = ACCOUNT_TAG,
    params(
        ("email" = String, Path, description = "Account email")
    ),
    responses(
        (status = 200, description = "Account or null", body = Option<AccountDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_account_by_email(
    State(state): State<AppState>,
    request: HttpRequest,
) -> Response {
    state
        .controllers
        .get_account_by_email
        .handle(request)
        .await
        .into_response()
}

/// Update an account.
///
/// Only supplied fields change. The `avatar` field carries the new image as a base64
/// string; leaving it out removes the current avatar.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = String, Path, description = "Account identifier")
    ),
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated"),
        (status = 400, description = "Invalid param, account not found or email in use", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_account(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .update_account
        .handle(request)
        .await
        .into_response()
}

/// Delete an account.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = String, Path, description = "Account identifier")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Account not found", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_account(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .delete_account
        .handle(request)
        .await
        .into_response()
}
