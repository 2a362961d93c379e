use super::AuthErr;
use axum::http::{HeaderMap, header};
use cookie::Cookie;

/// Find the session token in the `Authorization` header, falling back to the session cookie
pub(super) fn extract_session_token(
    headers: &HeaderMap,
    cookie_name: &str,
) -> Result<String, AuthErr> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    if let Some(auth_header) = auth_header {
        tracing::trace!("Authorization header provided");
        return auth_header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or(AuthErr::InvalidAuthorizationHeaderFormat);
    }

    tracing::trace!("no Authorization header provided. checking for cookie");
    find_cookie(headers, cookie_name).ok_or(AuthErr::NoSessionToken)
}

/// Value of the first cookie named `name` across every `Cookie` header
pub(crate) fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|raw| {
            let cookie = Cookie::parse(raw.trim()).ok()?;
            (cookie.name() == name).then(|| cookie.value().to_owned())
        })
}
