use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body: `{"error": <title>, "code": <stable code>, "message": <detail>}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message, code: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(message.into()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::Validation(_) | ServiceError::Model(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::CompanyNotFound(_) => (StatusCode::NOT_FOUND, "Company Not Found"),
            ServiceError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Storage Error"),
        };
        Self { status, title, message: Some(e.to_string()), code: Some(e.code()) }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = ?self.message, "request failed");
        }
        let body = ErrorBody { error: self.title.to_string(), code: self.code, message: self.message };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::CompanyNotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn company_not_found_is_distinguishable_from_not_found() {
        let a = JsonApiError::from(ServiceError::NotFound("x".into()));
        let b = JsonApiError::from(ServiceError::CompanyNotFound("x".into()));
        assert_eq!(a.status, b.status);
        assert_ne!(a.code, b.code);
        assert_ne!(a.title, b.title);
    }
}
