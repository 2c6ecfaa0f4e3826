//! Bridges axum and the controller contract.
//!
//! `HttpRequest` is an axum extractor, so route handlers take it as their last argument
//! and hand it straight to a controller. `HttpResponse` implements `IntoResponse`.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, RawPathParams, Request},
    http::{header::AUTHORIZATION, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::server::{
    error::param::InvalidParamError,
    http::{helper, HttpRequest, HttpResponse},
};

const ACCESS_TOKEN_HEADER: &str = "x-access-token";
const FILE_FIELD: &str = "avatar";

impl<S> FromRequest<S> for HttpRequest
where
    S: Send + Sync,
{
    type Rejection = HttpResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without placeholders have no captures to read.
        let params = match RawPathParams::from_request_parts(&mut parts, state).await {
            Ok(raw) => raw
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            Err(_) => HashMap::new(),
        };
        let access_token = access_token(&parts.headers);

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|err| {
                tracing::debug!("Failed to read request body: {}", err);
                helper::bad_request(InvalidParamError::new("body"))
            })?;

        let mut body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|err| {
                tracing::debug!("Request body is not valid JSON: {}", err);
                helper::bad_request(InvalidParamError::new("body"))
            })?
        };
        let base64_file = take_file(&mut body);

        Ok(Self {
            params,
            body,
            access_token,
            base64_file,
        })
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status_code, Json(body)).into_response(),
            None => self.status_code.into_response(),
        }
    }
}

/// Reads the access token from `Authorization: Bearer <token>`, falling back to the
/// `x-access-token` header.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let token = match bearer {
        Some(token) if !token.is_empty() => Some(token),
        _ => headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty()),
    };

    token.map(str::to_string)
}

/// Removes the uploaded file from the body when it is a string.
fn take_file(body: &mut Value) -> Option<String> {
    let object = body.as_object_mut()?;
    if !object.get(FILE_FIELD).is_some_and(Value::is_string) {
        return None;
    }

    match object.remove(FILE_FIELD) {
        Some(Value::String(file)) => Some(file),
        _ => None,
    }
}
