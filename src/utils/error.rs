use crate::store::StoreError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

/// Mensagem devolvida quando nenhum usuário corresponde ao id
pub const USER_NOT_FOUND: &str = "user not found";

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    NotFound(String),
    InvalidRequest(String),
    InvalidIdentifier(String),
}

impl AppError {
    /// Texto enviado ao cliente no campo `error`
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidRequest(msg)
            | AppError::InvalidIdentifier(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        let message = e.to_string();
        match e {
            StoreError::InvalidIdentifier(_) => AppError::InvalidIdentifier(message),
            StoreError::Backend(_) => AppError::DatabaseError(message),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) | AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::warn!("⚠️ {}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.message()
        }))
    }
}
