// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    messages: Vec<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors)
            | ApplicationError::Domain(DomainError::Validation(errors)) => {
                Self::new(StatusCode::BAD_REQUEST, errors.into_messages())
            }
            ApplicationError::Domain(DomainError::Conflict(msg)) => {
                Self::new(StatusCode::CONFLICT, vec![msg])
            }
            ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::new(StatusCode::NOT_FOUND, vec![msg])
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["internal server error".into()],
                )
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, vec![message.into()])
    }

    fn new(status: StatusCode, messages: Vec<String>) -> Self {
        Self { status, messages }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            messages: self.messages,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Bad Request")]
    pub error: String,
    #[schema(example = json!(["Field name cannot be null or empty"]))]
    pub messages: Vec<String>,
    #[schema(example = "2024-05-01T12:00:00.000Z")]
    pub timestamp: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
