use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::services::ServiceError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Adds `WWW-Authenticate: Bearer` to the response
    pub bearer_challenge: bool,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            bearer_challenge: false,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error carrying a bearer challenge
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            bearer_challenge: true,
            ..Self::new(StatusCode::UNAUTHORIZED, message)
        }
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Creates a 503 Service Unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        let mut response = (self.status, body).into_response();
        if self.bearer_challenge {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::NotFound | ServiceError::NoDataYet => Self::not_found(message),
            ServiceError::Forbidden => Self::forbidden(message),
            ServiceError::Unavailable(_) => Self::service_unavailable(message),
            ServiceError::UpstreamError { .. } | ServiceError::SyncFailed { .. } => {
                tracing::error!(error = %message, "Team data request failed");
                Self::internal_server_error(message)
            }
        }
    }
}

/// Failure reported inside a 200 response
///
/// Used by the import and indicator endpoints, which never answer with an
/// error status.
#[derive(Debug, Serialize)]
pub struct SoftError {
    pub error: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

impl SoftError {
    pub fn new(error: impl Into<String>, detail: impl ToString) -> Self {
        Self {
            error: error.into(),
            detail: detail.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl IntoResponse for SoftError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.error, detail = %self.detail, "Reporting soft error");
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::NotFound, StatusCode::NOT_FOUND),
            (ServiceError::Forbidden, StatusCode::FORBIDDEN),
            (
                ServiceError::Unavailable("dns".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServiceError::UpstreamError { status_code: 502 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::SyncFailed {
                    cause: "db down".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn unauthorized_carries_bearer_challenge() {
        let response = ApiError::unauthorized("nope").into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
    }

    #[test]
    fn soft_errors_answer_ok() {
        let response = SoftError::new("Erro ao importar dados", ServiceError::Forbidden).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn soft_error_detail_uses_display() {
        let err = SoftError::new("Erro ao calcular indicadores", ServiceError::NotFound);
        assert_eq!(err.detail, "Resource not found");
    }
}
