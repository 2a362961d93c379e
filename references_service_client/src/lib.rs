use constants::{API_KEY_HEADER, OASST_USER_HEADER};
use models_references::{BackendUser, Locale};
use std::future::Future;

pub(crate) mod constants;
pub mod fetch_references;

/// The capability the website needs from the backend api
pub trait ReferencesBackend: Send + Sync + 'static {
    /// Fetch the references matching `query`, localized to `locale`.
    /// The payload is returned as the backend produced it.
    fn fetch_references(
        &self,
        query: &str,
        locale: &Locale,
    ) -> impl Future<Output = anyhow::Result<serde_json::Value>> + Send;
}

/// Http client for the backend api, scoped to a single website user
#[derive(Clone, Debug)]
pub struct OasstApiClient {
    url: String,
    client: reqwest::Client,
}

impl OasstApiClient {
    pub fn new(url: &str, api_key: &str, user: &BackendUser) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key.parse()?);
        headers.insert(OASST_USER_HEADER, user.header_value().parse()?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }
}
