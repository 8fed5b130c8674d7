use std::collections::BTreeMap;

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Per-field validation messages, keyed by the offending field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Error type returned by every handler and service.
///
/// Carries an HTTP status plus either a single message (rendered as
/// `{"error": "..."}`) or a per-field message map (rendered as the map
/// itself, e.g. `{"name": ["name is required"]}`).
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub fields: Option<FieldErrors>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            fields: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// 400 with a per-field message map as the response body.
    pub fn validation(fields: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: anyhow::anyhow!("Validation failed"),
            fields: Some(fields),
        }
    }

    /// 400 with a single message on one field.
    pub fn field(field: &str, message: &str) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.to_string(), vec![message.to_string()]);
        Self::validation(fields)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.fields {
            Some(fields) => (self.status, Json(fields)).into_response(),
            None => {
                let body = Json(json!({
                    "error": self.error.to_string()
                }));
                (self.status, body).into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
