use crate::auth::find_cookie;
use axum::http::{HeaderMap, header};
use models_references::Locale;

/// Cookie the website stores the user's chosen language in
static LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// The locale of a request: the `lang` parameter, then the locale cookie,
/// then `Accept-Language`, then english
pub(super) fn locale_from_request(lang_param: Option<&str>, headers: &HeaderMap) -> Locale {
    lang_param
        .and_then(Locale::parse)
        .or_else(|| find_cookie(headers, LOCALE_COOKIE).and_then(|c| Locale::parse(&c)))
        .or_else(|| {
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|h| h.to_str().ok())
                .and_then(Locale::from_accept_language)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: Option<&'static str>, accept: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie {
            headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        }
        if let Some(accept) = accept {
            headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(accept));
        }
        headers
    }

    #[test]
    fn param_wins() {
        let h = headers(Some("NEXT_LOCALE=de"), Some("fr"));
        assert_eq!(locale_from_request(Some("is"), &h).as_str(), "is");
    }

    #[test]
    fn cookie_beats_accept_language() {
        let h = headers(Some("theme=dark; NEXT_LOCALE=de"), Some("fr"));
        assert_eq!(locale_from_request(None, &h).as_str(), "de");
    }

    #[test]
    fn invalid_param_falls_through() {
        let h = headers(None, Some("pt-BR,pt;q=0.9"));
        assert_eq!(locale_from_request(Some("<bad>"), &h).as_str(), "pt-BR");
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(locale_from_request(None, &HeaderMap::new()).as_str(), "en");
    }
}
