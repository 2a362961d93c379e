use anyhow::Context;
pub use oasst_env::Environment;
use oasst_env::env_var;

env_var!(
    #[derive(Clone)]
    pub struct ApiKey;
);

env_var!(
    #[derive(Clone)]
    pub struct CitationsPath;
);

env_var!(
    #[derive(Clone)]
    pub struct EmbeddingsUrl;
);

env_var!(
    #[derive(Clone)]
    pub struct EmbeddingsModel;
);

env_var!(
    #[derive(Clone)]
    pub struct EmbeddingsApiKey;
);

/// The configuration parameters for the references service, read from the environment
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// The environment we are in
    pub environment: Environment,
    /// The key the website must present in the `x-api-key` header
    pub api_key: ApiKey,
    /// Accept any api key. Only honored outside of production.
    pub allow_any_api_key: bool,
    /// JSON file holding the pre-embedded citation chunks
    pub citations_path: CitationsPath,
    /// OpenAI compatible embeddings endpoint used to embed queries
    pub embeddings_url: EmbeddingsUrl,
    pub embeddings_model: EmbeddingsModel,
    pub embeddings_api_key: Option<EmbeddingsApiKey>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let environment = Environment::new_or_prod();

        let allow_any_api_key = !matches!(environment, Environment::Production)
            && std::env::var("DEBUG_ALLOW_ANY_API_KEY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false);

        Ok(Config {
            port,
            environment,
            api_key: ApiKey::new()?,
            allow_any_api_key,
            citations_path: CitationsPath::new_or("fixtures/citations.json"),
            embeddings_url: EmbeddingsUrl::new()?,
            embeddings_model: EmbeddingsModel::new_or("multilingual-e5-large-instruct"),
            embeddings_api_key: EmbeddingsApiKey::new().ok(),
        })
    }
}
