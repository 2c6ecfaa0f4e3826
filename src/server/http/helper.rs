//! Response constructors and request body validation shared by controllers.

use std::fmt::Display;

use axum::http::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::server::{
    error::{
        domain::UseCaseError,
        param::{InvalidParamError, MissingParamError, ServerError},
    },
    http::HttpResponse,
};

/// 200 OK with a JSON body. Falls back to a server error if `body` cannot be serialized.
pub fn ok(body: impl Serialize) -> HttpResponse {
    match serde_json::to_value(body) {
        Ok(body) => HttpResponse {
            status_code: StatusCode::OK,
            body: Some(body),
        },
        Err(err) => server_error(err),
    }
}

/// 200 OK with an empty body.
pub fn ok_empty() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: None,
    }
}

/// 201 Created with an empty body.
pub fn created() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::CREATED,
        body: None,
    }
}

pub fn bad_request(err: impl Display) -> HttpResponse {
    tracing::debug!("Bad request: {}", err);

    error_response(StatusCode::BAD_REQUEST, err)
}

pub fn forbidden(err: impl Display) -> HttpResponse {
    error_response(StatusCode::FORBIDDEN, err)
}

/// 500 with the generic "Internal server error" body.
///
/// The underlying error is logged and never sent to the client.
pub fn server_error(err: impl Display) -> HttpResponse {
    tracing::error!("{}", err);

    error_response(StatusCode::INTERNAL_SERVER_ERROR, ServerError)
}

/// Maps a use-case failure onto a response.
///
/// # Returns
/// - 400 Bad Request - Domain errors, with their message as body
/// - 500 Internal Server Error - Repository and internal errors
pub fn use_case_error(err: UseCaseError) -> HttpResponse {
    match err {
        UseCaseError::Domain(err) => bad_request(err),
        UseCaseError::Repository(err) => server_error(err),
        UseCaseError::Internal(err) => server_error(err),
    }
}

fn error_response(status_code: StatusCode, err: impl Display) -> HttpResponse {
    HttpResponse {
        status_code,
        body: Some(json!({ "error": err.to_string() })),
    }
}

/// Returns the first of `fields` that is missing from `body`.
///
/// A field counts as missing when it is absent, `null`, `false`, `0` or the empty
/// string. Fields are checked in the order given.
pub fn missing_param(body: &Value, fields: &[&str]) -> Option<MissingParamError> {
    fields
        .iter()
        .find(|field| !body.get(**field).is_some_and(is_truthy))
        .map(|field| MissingParamError::new(*field))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserializes the request body, naming the offending field on failure.
pub fn parse_body<T: DeserializeOwned>(body: &Value) -> Result<T, InvalidParamError> {
    serde_path_to_error::deserialize(body.clone()).map_err(|err| {
        let path = err.path().to_string();
        if path == "." {
            InvalidParamError::new("body")
        } else {
            InvalidParamError::new(path)
        }
    })
}

/// Deserializes a partial update body. An empty body is treated as an empty patch.
pub fn parse_patch<T: DeserializeOwned>(body: &Value) -> Result<T, InvalidParamError> {
    if body.is_null() {
        parse_body(&json!({}))
    } else {
        parse_body(body)
    }
}
