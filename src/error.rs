//! Error types for Daybook

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'daybook init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("Token is missing!")]
    MissingToken,

    #[error("Token has been revoked. Please log in again.")]
    RevokedToken,

    #[error("Token has expired!")]
    ExpiredToken,

    #[error("Invalid token!")]
    InvalidToken,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// HTTP status this error maps to at the request boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::MissingToken | Error::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Authentication(_)
            | Error::RevokedToken
            | Error::ExpiredToken
            | Error::InvalidToken => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
