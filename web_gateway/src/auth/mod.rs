use crate::config::{Environment, NextauthSecret};
use axum::http::HeaderMap;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use strum::Display;

mod error;
mod headers;

pub use error::AuthErr;
pub(crate) use headers::find_cookie;


/// Session cookie set by the website's auth layer
pub static SESSION_COOKIE: &str = "next-auth.session-token";
/// In production the cookie is only sent over https and carries the `__Secure-` prefix
pub static SECURE_SESSION_COOKIE: &str = "__Secure-next-auth.session-token";

/// The role of a website user as carried in the session
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, Default)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    General,
    Moderator,
    Admin,
    Banned,
}

/// Claims of a website session token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    /// The website user id
    pub sub: String,
    #[serde(default)]
    pub role: Role,
    pub exp: usize,
}

/// Decodes session tokens and applies the role gate
#[derive(Clone)]
pub struct SessionValidator {
    secret: NextauthSecret,
    cookie_name: &'static str,
}

impl SessionValidator {
    pub fn new(secret: NextauthSecret, environment: Environment) -> Self {
        let cookie_name = match environment {
            Environment::Production => SECURE_SESSION_COOKIE,
            Environment::Develop | Environment::Local => SESSION_COOKIE,
        };
        Self {
            secret,
            cookie_name,
        }
    }

    fn decode(&self, token: &str) -> Result<SessionToken, AuthErr> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<SessionToken>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|decoded| decoded.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthErr::Expired,
            _ => AuthErr::Invalid {
                details: e.to_string(),
            },
        })
    }

    /// Resolve the caller's session from the request headers, rejecting
    /// callers whose role is in `excluded`
    #[tracing::instrument(skip_all, err(level = tracing::Level::DEBUG))]
    pub fn authenticate_without_role(
        &self,
        headers: &HeaderMap,
        excluded: Role,
    ) -> Result<SessionToken, AuthErr> {
        let token = headers::extract_session_token(headers, self.cookie_name)?;
        let session = self.decode(&token)?;

        if session.role == excluded {
            tracing::warn!(user_id = %session.sub, role = %session.role, "rejected by role gate");
            return Err(AuthErr::Forbidden { role: session.role });
        }

        Ok(session)
    }
}
