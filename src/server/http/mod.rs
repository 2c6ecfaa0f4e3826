//! Transport-neutral request and response types.
//!
//! Controllers never see axum types. The adapter in `adapter` turns an incoming axum
//! request into an `HttpRequest` and turns the controller's `HttpResponse` back into an
//! axum response; `helper` has the constructors controllers use to build responses.

pub mod adapter;
pub mod helper;

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

/// Request as seen by a controller.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    /// Path parameters keyed by their route placeholder name.
    pub params: HashMap<String, String>,
    /// Parsed JSON body, `Value::Null` when the request had none.
    pub body: Value,
    /// Token lifted from the `Authorization: Bearer` or `x-access-token` header.
    pub access_token: Option<String>,
    /// Uploaded avatar, lifted out of the body's `avatar` string field.
    pub base64_file: Option<String>,
}

impl HttpRequest {
    /// Returns a path parameter, treating an empty value as absent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_base64_file(mut self, file: impl Into<String>) -> Self {
        self.base64_file = Some(file.into());
        self
    }
}

/// Response produced by a controller. `body` of `None` means an empty response body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: Option<Value>,
}

/// One controller per exposed operation.
///
/// `handle` never fails: every error is already mapped to a status code and body.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
