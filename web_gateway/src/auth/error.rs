use super::Role;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use models_references::ErrorResponse;

#[derive(thiserror::Error, Debug)]
pub enum AuthErr {
    #[error("invalid Authorization header format")]
    InvalidAuthorizationHeaderFormat,
    #[error("no session token provided")]
    NoSessionToken,
    #[error("session validation failed: {details}")]
    Invalid { details: String },
    #[error("session is expired")]
    Expired,
    #[error("role {role} is not allowed")]
    Forbidden { role: Role },
}

impl AuthErr {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthErr::Forbidden { .. } => StatusCode::FORBIDDEN,
            AuthErr::InvalidAuthorizationHeaderFormat
            | AuthErr::NoSessionToken
            | AuthErr::Invalid { .. }
            | AuthErr::Expired => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthErr {
    fn into_response(self) -> Response {
        let message = match &self {
            AuthErr::Forbidden { .. } => "forbidden",
            AuthErr::Expired => "session expired",
            _ => "unauthorized",
        };
        (self.status_code(), Json(ErrorResponse { message })).into_response()
    }
}
