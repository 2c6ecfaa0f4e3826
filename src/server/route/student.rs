use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{http::HttpRequest, state::AppState},
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "alunos";

/// Register a student.
///
/// # Access Control
/// - `ADMIN`
///
/// # Returns
/// - `201 Created` - Student created, empty body
/// - `400 Bad Request` - Missing or invalid field, or email already in use
/// - `403 Forbidden` - No valid access token or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/alunos",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created"),
        (status = 400, description = "Missing or invalid param, or email in use", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_student(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .create_student
        .handle(request)
        .await
        .into_response()
}

/// List every student.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/alunos",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = Vec<StudentDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_students(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .get_students
        .handle(request)
        .await
        .into_response()
}

/// Get a student by identifier. Responds with `null` when no student matches.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/alunos/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Student or null", body = Option<StudentDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_student_by_id(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .get_student_by_id
        .handle(request)
        .await
        .into_response()
}

/// Get a student by email address. Responds with `null` when no student matches.
///
/// # Access Control
/// - `ADMIN`, `USER`
#[utoipa::path(
    get,
    path = "/api/alunos/email/{email}",
    tag = STUDENT_TAG,
    params(
        ("email" = String, Path, description = "Student email")
    ),
    responses(
        (status = 200, description = "Student or null", body = Option<StudentDto>),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_student_by_email(
    State(state): State<AppState>,
    request: HttpRequest,
) -> Response {
    state
        .controllers
        .get_student_by_email
        .handle(request)
        .await
        .into_response()
}

/// Update a student. Only supplied fields change; `null` clears an optional field.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    put,
    path = "/api/alunos/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student identifier")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated"),
        (status = 400, description = "Invalid param, student not found or email in use", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_student(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .update_student
        .handle(request)
        .await
        .into_response()
}

/// Delete a student.
///
/// # Access Control
/// - `ADMIN`
#[utoipa::path(
    delete,
    path = "/api/alunos/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 400, description = "Student not found", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_student(State(state): State<AppState>, request: HttpRequest) -> Response {
    state
        .controllers
        .delete_student
        .handle(request)
        .await
        .into_response()
}
