use crate::{OasstApiClient, ReferencesBackend};
use models_references::Locale;

impl OasstApiClient {
    #[tracing::instrument(skip(self), err)]
    pub async fn fetch_references(
        &self,
        query: &str,
        locale: &Locale,
    ) -> anyhow::Result<serde_json::Value> {
        let res = self
            .client
            .get(format!("{}/api/v1/references/", self.url))
            .query(&[("query", query), ("lang", locale.as_str())])
            .send()
            .await?;

        match res.status() {
            reqwest::StatusCode::OK => {
                let result = res.json::<serde_json::Value>().await?;
                Ok(result)
            }
            status_code => {
                let body: String = res.text().await?;
                anyhow::bail!(
                    "unexpected response from backend api status code {}: {}",
                    status_code,
                    body
                )
            }
        }
    }
}

impl ReferencesBackend for OasstApiClient {
    async fn fetch_references(
        &self,
        query: &str,
        locale: &Locale,
    ) -> anyhow::Result<serde_json::Value> {
        OasstApiClient::fetch_references(self, query, locale).await
    }
}
