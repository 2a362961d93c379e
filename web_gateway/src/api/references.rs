use crate::{
    api::{GatewayState, locale::locale_from_request},
    auth::{AuthErr, Role},
    domain::ports::{BackendClientFactory, UserResolver},
};
use axum::{
    Json,
    extract::{RawQuery, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use models_references::ErrorResponse;
use references_service_client::ReferencesBackend;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ReferencesRouteErr {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("query parameter is required")]
    MissingQuery,
    #[error("query parameter must be a single non-empty string")]
    InvalidQuery,
    #[error(transparent)]
    Auth(#[from] AuthErr),
    #[error("unauthorized")]
    UnknownUser,
    #[error("internal server error")]
    UserResolution(#[source] anyhow::Error),
    /// the cause is logged but never returned to the caller
    #[error("Failed to fetch references")]
    Backend(#[source] anyhow::Error),
}

impl IntoResponse for ReferencesRouteErr {
    fn into_response(self) -> Response {
        if let ReferencesRouteErr::Auth(auth) = self {
            return auth.into_response();
        }

        let status_code = match &self {
            ReferencesRouteErr::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ReferencesRouteErr::MissingQuery | ReferencesRouteErr::InvalidQuery => {
                StatusCode::BAD_REQUEST
            }
            ReferencesRouteErr::Auth(auth) => auth.status_code(),
            ReferencesRouteErr::UnknownUser => StatusCode::UNAUTHORIZED,
            ReferencesRouteErr::UserResolution(e) => {
                tracing::error!(error=?e, "unable to resolve backend user");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ReferencesRouteErr::Backend(e) => {
                tracing::error!(error=?e, "Failed to fetch references");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut res = (
            status_code,
            Json(ErrorResponse {
                message: &self.to_string(),
            }),
        )
            .into_response();

        if let ReferencesRouteErr::MethodNotAllowed = self {
            res.headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET"));
        }

        res
    }
}

/// The single `query` value of a raw query string
fn required_query(pairs: &[(String, String)]) -> Result<&str, ReferencesRouteErr> {
    let mut values = pairs.iter().filter(|(k, _)| k == "query").map(|(_, v)| v);
    let first = values.next().ok_or(ReferencesRouteErr::MissingQuery)?;
    if values.next().is_some() || first.is_empty() {
        return Err(ReferencesRouteErr::InvalidQuery);
    }
    Ok(first)
}

/// Forward a references query to the backend on behalf of the signed in user
#[tracing::instrument(skip_all, fields(method = %method), err(level = tracing::Level::DEBUG))]
pub async fn references_handler<U, F>(
    State(state): State<GatewayState<U, F>>,
    method: Method,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Response, ReferencesRouteErr>
where
    U: UserResolver,
    F: BackendClientFactory,
{
    if method != Method::GET {
        return Err(ReferencesRouteErr::MethodNotAllowed);
    }

    let pairs: Vec<(String, String)> = raw_query
        .as_deref()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let query = required_query(&pairs)?;

    let session = state
        .sessions
        .authenticate_without_role(&headers, Role::Banned)?;

    let user = state
        .users
        .resolve(&session.sub)
        .await
        .map_err(ReferencesRouteErr::UserResolution)?
        .ok_or(ReferencesRouteErr::UnknownUser)?;

    let lang = pairs
        .iter()
        .find(|(k, _)| k == "lang")
        .map(|(_, v)| v.as_str());
    let locale = locale_from_request(lang, &headers);

    let client = state
        .clients
        .client_for(&user)
        .map_err(ReferencesRouteErr::Backend)?;

    let references = client
        .fetch_references(query, &locale)
        .await
        .map_err(ReferencesRouteErr::Backend)?;

    Ok((StatusCode::OK, Json(references)).into_response())
}
