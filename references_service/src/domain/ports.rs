use crate::domain::models::{IndexErr, ReferencesErr, ScoredChunk};
use models_references::{Locale, Reference};
use std::future::Future;

/// Turns text into the vector space of the citation index
#[cfg_attr(test, mockall::automock)]
pub trait Embedder: Send + Sync + 'static {
    fn embed(&self, text: &str) -> impl Future<Output = anyhow::Result<Vec<f32>>> + Send;
}

/// Nearest neighbour lookup over the embedded citations
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceIndex: Send + Sync + 'static {
    /// Return at most `k` chunks ordered by descending inner product with `query`
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>, IndexErr>;
}

pub trait ReferencesService: Send + Sync + 'static {
    /// Find the references that most closely match the query
    fn get_references(
        &self,
        query: &str,
        lang: &Locale,
    ) -> impl Future<Output = Result<Vec<Reference>, ReferencesErr>> + Send;
}
