use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::result::{DispatchResult, ErrorBody};

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Missing environment or backup_name")]
    MissingFields,
    #[error("{} not configured", TOKEN_VAR)]
    TokenNotConfigured,
    #[error("GitHub API error: {status}")]
    Remote { status: u16 },
    #[error("{0}")]
    InvalidBody(String),
    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingFields => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::InvalidBody(e.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        match self {
            // Validação e configuração respondem só com {"error": ...}
            RelayError::MissingFields | RelayError::TokenNotConfigured => {
                (code, Json(ErrorBody { error: self.to_string() })).into_response()
            }
            _ => (code, Json(DispatchResult::failure(self.to_string()))).into_response(),
        }
    }
}
