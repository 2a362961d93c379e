use crate::use_references::CacheKey;
use std::future::Future;

/// Resolves a cache key to the json the website route answered with
pub trait Fetcher: Send + Sync + 'static {
    fn get(&self, key: &CacheKey) -> impl Future<Output = anyhow::Result<serde_json::Value>> + Send;
}

/// Fetches from a running website gateway, authenticated with a session token
#[derive(Clone, Debug)]
pub struct GatewayFetcher {
    url: String,
    client: reqwest::Client,
}

impl GatewayFetcher {
    pub fn new(url: &str, session_token: Option<&str>) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = session_token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {token}").parse()?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl Fetcher for GatewayFetcher {
    #[tracing::instrument(skip(self), err)]
    async fn get(&self, key: &CacheKey) -> anyhow::Result<serde_json::Value> {
        let res = self
            .client
            .get(format!("{}{}", self.url, key.path))
            .query(&[("query", key.query.as_str()), ("lang", key.locale.as_str())])
            .send()
            .await?;

        match res.status() {
            reqwest::StatusCode::OK => Ok(res.json::<serde_json::Value>().await?),
            status_code => {
                let body: String = res.text().await?;
                anyhow::bail!(
                    "unexpected response from website status code {}: {}",
                    status_code,
                    body
                )
            }
        }
    }
}
