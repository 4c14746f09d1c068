use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    // Request fields outside their allowed range.
    #[error("{0}")]
    ValidationError(String),

    // Apartment or parking type missing from the pricing tables.
    #[error("{0}")]
    UnknownOption(String),

    #[error("Лот {building}-{number} не найден")]
    LotNotFound { building: String, number: i64 },

    #[error("Нет данных о цене лота")]
    MissingLotPrice,
}

impl EngineError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EngineError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::UnknownOption(_) | EngineError::MissingLotPrice => StatusCode::BAD_REQUEST,
            EngineError::LotNotFound { .. } => StatusCode::NOT_FOUND,
            EngineError::ConfigError(_)
            | EngineError::IoError { .. }
            | EngineError::JsonError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Malformed or incomplete request bodies are reported like any other invalid input.
impl From<JsonRejection> for EngineError {
    fn from(rejection: JsonRejection) -> Self {
        EngineError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, %status, "Mapping EngineError to HTTP response");
        } else {
            tracing::warn!(error = %self, %status, "Rejecting request");
        }
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
