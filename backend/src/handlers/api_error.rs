use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the public API. The display text is what the client sees,
/// upstream details are logged where they happen.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Captcha verification required")]
    CaptchaRequired,
    #[error("Captcha verification failed")]
    CaptchaRejected,
    #[error("Server configuration error")]
    Configuration,
    #[error("Internal server error")]
    Internal,
    #[error("Failed to submit registration")]
    Upstream,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields
            | ApiError::CaptchaRequired
            | ApiError::CaptchaRejected => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Configuration
            | ApiError::Internal
            | ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_400() {
        for err in [
            ApiError::MissingFields,
            ApiError::CaptchaRequired,
            ApiError::CaptchaRejected,
        ] {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn server_errors_hide_details() {
        assert_eq!(ApiError::Configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
        assert_eq!(ApiError::Upstream.to_string(), "Failed to submit registration");
    }
}
