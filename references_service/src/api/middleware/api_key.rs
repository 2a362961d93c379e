use crate::config::ApiKey;
use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::ToStrError},
    middleware::Next,
    response::{IntoResponse, Response},
};
use models_references::{OasstErrorCode, OasstErrorResponse};
use thiserror::Error;
use tracing::Level;

#[cfg(test)]
mod tests;

/// The header the website sends its api key in
pub(crate) static API_KEY_HEADER: &str = "x-api-key";
/// Query parameter alternative to [API_KEY_HEADER]
static API_KEY_QUERY: &str = "api_key";

/// Which api keys the service accepts
#[derive(Clone, Debug)]
pub struct ApiKeyPolicy {
    expected: ApiKey,
    allow_any: bool,
}

impl ApiKeyPolicy {
    pub fn new(expected: ApiKey, allow_any: bool) -> Self {
        Self {
            expected,
            allow_any,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ApiKeyErr {
    #[error("Missing api key")]
    Missing,
    #[error("Failed to parse api key header to ascii {0:?}")]
    NonAscii(#[from] ToStrError),
    #[error("Could not validate credentials")]
    Invalid,
}

impl IntoResponse for ApiKeyErr {
    fn into_response(self) -> Response {
        let error_code = match &self {
            ApiKeyErr::Missing => OasstErrorCode::ApiKeyMissing,
            ApiKeyErr::NonAscii(_) | ApiKeyErr::Invalid => OasstErrorCode::ApiKeyInvalid,
        };
        (
            StatusCode::FORBIDDEN,
            Json(OasstErrorResponse {
                message: self.to_string(),
                error_code,
            }),
        )
            .into_response()
    }
}

/// The api key from the query string wins over the header
fn extract_api_key(req: &Request) -> Result<Option<String>, ApiKeyErr> {
    let from_query = req.uri().query().and_then(|q| {
        url_query_pairs(q)
            .find(|(k, _)| k == API_KEY_QUERY)
            .map(|(_, v)| v)
    });
    if let Some(key) = from_query.filter(|k| !k.is_empty()) {
        return Ok(Some(key));
    }

    header_api_key(req.headers())
}

fn header_api_key(headers: &HeaderMap) -> Result<Option<String>, ApiKeyErr> {
    Ok(headers
        .get(API_KEY_HEADER)
        .map(|header| header.to_str())
        .transpose()?
        .filter(|k| !k.is_empty())
        .map(str::to_string))
}

fn url_query_pairs(q: &str) -> impl Iterator<Item = (String, String)> + '_ {
    url::form_urlencoded::parse(q.as_bytes()).into_owned()
}

/// Validates the api key presented by the website
#[tracing::instrument(skip_all, err(level = Level::WARN))]
pub(in crate::api) async fn handler(
    State(policy): State<ApiKeyPolicy>,
    req: Request,
    next: Next,
) -> Result<Response, ApiKeyErr> {
    let Some(api_key) = extract_api_key(&req)? else {
        return Err(ApiKeyErr::Missing);
    };

    if !policy.allow_any && api_key != policy.expected.as_ref() {
        return Err(ApiKeyErr::Invalid);
    }

    Ok(next.run(req).await)
}
