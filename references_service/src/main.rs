use anyhow::Context;
use config::Config;
use domain::service::ReferencesServiceImpl;
use oasst_entrypoint::OasstEntrypoint;
use outbound::{flat_index::FlatIpIndex, http_embedder::HttpEmbedder};

mod api;
mod config;
mod domain;
mod outbound;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    OasstEntrypoint::default().init();

    let config = Config::from_env().context("expected to be able to generate config")?;
    tracing::trace!("initialized config");

    let index = FlatIpIndex::load(&config.citations_path)
        .await
        .with_context(|| format!("unable to load citations from {}", &*config.citations_path))?;
    tracing::info!(
        citations = index.len(),
        dimension = index.dimension(),
        "loaded citation index"
    );

    let embedder = HttpEmbedder::new(
        &config.embeddings_url,
        &config.embeddings_model,
        config.embeddings_api_key.as_deref(),
    )?;

    let service = ReferencesServiceImpl::new(embedder, index);

    api::setup_and_serve(&config, service).await
}
