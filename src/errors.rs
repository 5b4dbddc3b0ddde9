use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Уніфікована структура відповіді про помилку.
/// Формат тіла фіксований контрактом relay-ендпоінта: `{error, details?}`.
#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Server misconfigured")]
    Misconfigured,

    /// Telegram відповів не-2xx; тіло відповіді зберігаємо для діагностики.
    #[error("Telegram error")]
    Upstream { details: String },

    #[error("Unexpected error")]
    Internal,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ReqwestError(_) | AppError::JsonError(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error, details) = self.wire_parts();
        if self.status_code().is_server_error() {
            log::error!("relay error: {} ({:?})", error, details);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse { error, details })
    }
}

impl AppError {
    /// Пара (error, details) для тіла відповіді. Внутрішні помилки назовні
    /// йдуть як "Unexpected error", причина — тільки в details.
    fn wire_parts(&self) -> (&str, Option<String>) {
        match self {
            AppError::ReqwestError(e) => ("Unexpected error", Some(e.to_string())),
            AppError::JsonError(e) => ("Unexpected error", Some(e.to_string())),
            AppError::Internal => ("Unexpected error", None),
            AppError::InvalidInput(message) => (message.as_str(), None),
            AppError::MethodNotAllowed => ("Method not allowed", None),
            AppError::Misconfigured => ("Server misconfigured", None),
            AppError::Upstream { details } => ("Telegram error", Some(details.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_relay_contract() {
        assert_eq!(
            AppError::InvalidInput("Missing required fields".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Misconfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream { details: "boom".into() }.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn upstream_body_carries_details() {
        let err = AppError::Upstream {
            details: "chat not found".into(),
        };
        let (error, details) = err.wire_parts();
        assert_eq!(error, "Telegram error");
        assert_eq!(details.as_deref(), Some("chat not found"));
    }
}
