use crate::config::ConfigError;
use crate::status::{ClaimStatusError, GatewayError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    ClaimStatus(ClaimStatusError),
    Payload(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::ClaimStatus(err) => write!(f, "claim status error: {}", err),
            AppError::Payload(err) => write!(f, "invalid claim payload: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::ClaimStatus(err) => Some(err),
            AppError::Payload(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Payload(_) => StatusCode::BAD_REQUEST,
            AppError::ClaimStatus(ClaimStatusError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::ClaimStatus(ClaimStatusError::Gateway(_)) => StatusCode::BAD_GATEWAY,
            AppError::ClaimStatus(ClaimStatusError::MissingClaimDetails)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ClaimStatusError> for AppError {
    fn from(value: ClaimStatusError) -> Self {
        Self::ClaimStatus(value)
    }
}

impl From<GatewayError> for AppError {
    fn from(value: GatewayError) -> Self {
        Self::ClaimStatus(ClaimStatusError::Gateway(value))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_claim_status_errors_to_http_status() {
        let cases = [
            (
                AppError::from(ClaimStatusError::NotFound("U-1".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(GatewayError::Unavailable("down".to_string())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::from(ClaimStatusError::MissingClaimDetails),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
