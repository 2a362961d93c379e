use crate::domain::ports::Embedder;
use serde::{Deserialize, Serialize};

/// Embeds text through an OpenAI compatible `/embeddings` endpoint
#[derive(Clone, Debug)]
pub struct HttpEmbedder {
    url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    pub fn new(url: &str, model: &str, api_key: Option<&str>) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(api_key) = api_key {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {api_key}").parse()?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            url: url.to_string(),
            model: model.to_string(),
            client,
        })
    }
}

impl Embedder for HttpEmbedder {
    #[tracing::instrument(skip(self), err)]
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let res = self
            .client
            .post(&self.url)
            .json(&EmbeddingsRequest {
                model: &self.model,
                input: [text],
            })
            .send()
            .await?;

        match res.status() {
            reqwest::StatusCode::OK => {
                let body = res.json::<EmbeddingsResponse>().await?;
                body.data
                    .into_iter()
                    .next()
                    .map(|d| d.embedding)
                    .ok_or_else(|| anyhow::anyhow!("embeddings response contained no data"))
            }
            status_code => {
                let body: String = res.text().await?;
                anyhow::bail!(
                    "unexpected response from embeddings endpoint status code {}: {}",
                    status_code,
                    body
                )
            }
        }
    }
}
