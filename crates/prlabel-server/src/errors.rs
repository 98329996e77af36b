//! Webhook errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::event_type::EventType;

/// Webhook error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Error while parsing webhook event for type {},\n  caused by: {}", event_type, source)]
    EventParseError {
        event_type: EventType,
        source: serde_json::Error,
    },

    #[error("Missing webhook signature.")]
    MissingWebhookSignature,

    #[error("Invalid webhook signature.")]
    InvalidWebhookSignature,

    #[error("Could not read request payload.")]
    PayloadError,

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },

    #[error("Metrics error,\n  caused by: {}", source)]
    MetricsError { source: prometheus::Error },

    #[error("Could not build metrics handler: {}", message)]
    MetricsHandlerError { message: String },

    #[error("Domain error,\n  caused by: {}", source)]
    DomainError { source: prlabel_core::DomainError },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::InvalidWebhookSignature => StatusCode::FORBIDDEN,
            ServerError::MissingWebhookSignature => StatusCode::UNAUTHORIZED,
            ServerError::EventParseError { .. } | ServerError::PayloadError => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

impl From<prlabel_core::DomainError> for ServerError {
    fn from(e: prlabel_core::DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl From<prometheus::Error> for ServerError {
    fn from(e: prometheus::Error) -> Self {
        Self::MetricsError { source: e }
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
