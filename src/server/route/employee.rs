use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        api::ErrorDto,
        employee::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto},
    },
    server::{http::HttpRequest, state::AppState},
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "funcionarios";

/// Register an employee.
///
/// # Access Control
/// - `ADMIN`
///
/// # Returns
/// - `201 Created` - Employee created, empty body
/// - `400 Bad Request` - Missing or invalid field, or email already in use
/// - `403 Forbidden` - No valid access token or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/funcionarios",
    tag = EMPLOYEE_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created"),
        (status = 400, description = "Missing or invalid param, or email in use", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_employee(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .create_employee
        .handle(request)
        .await
        .into_response()
}

/// List every employee.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/funcionarios",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<EmployeeDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_employees(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .get_employees
        .handle(request)
        .await
        .into_response()
}

/// Get an employee by identifier. Responds with `null` when no employee matches.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/funcionarios/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Employee or null", body = Option<EmployeeDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_employee_by_id(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .get_employee_by_id
        .handle(request)
        .await
        .into_response()
}

/// Get an employee by email address. Responds with `null` when no employee matches.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/funcionarios/email/{email}",
    tag = EMPLOYEE_TAG,
    params(
        ("email" = String, Path, description = "Employee email")
    ),
    responses(
        (status = 200, description = "Employee or null", body = Option<EmployeeDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_employee_by_email(
    State(state): State<AppState>,
    request: HttpRequest,
) -> Response {
    state
        .controllers
        .get_employee_by_email
        .handle(request)
        .await
        .into_response()
}

/// Update an employee. Only supplied fields change; `null` clears an optional field.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    put,
    path = "/api/funcionarios/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Employee updated"),
        (status = 400, description = "Invalid param, employee not found or email in use", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_employee(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .update_employee
        .handle(request)
        .await
        .into_response()
}

/// Delete an employee.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    delete,
    path = "/api/funcionarios/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 400, description = "Employee not found", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_employee(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .delete_employee
        .handle(request)
        .await
        .into_response()
}
