use crate::domain::{
    models::{DEFAULT_TOP_K, ReferencesErr},
    ports::{Embedder, ReferenceIndex, ReferencesService},
};
use models_references::{Locale, Reference};

#[cfg(test)]
mod tests;

/// Similarity search over the citation corpus with abstracted interfaces for mocking
pub struct ReferencesServiceImpl<E, I> {
    embedder: E,
    index: I,
    top_k: usize,
}

impl<E, I> ReferencesServiceImpl<E, I>
where
    E: Embedder,
    I: ReferenceIndex,
{
    pub fn new(embedder: E, index: I) -> Self {
        ReferencesServiceImpl {
            embedder,
            index,
            top_k: DEFAULT_TOP_K,
        }
    }

    #[cfg(test)]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

impl<E, I> ReferencesService for ReferencesServiceImpl<E, I>
where
    E: Embedder,
    I: ReferenceIndex,
{
    #[tracing::instrument(skip(self), err)]
    async fn get_references(
        &self,
        query: &str,
        lang: &Locale,
    ) -> Result<Vec<Reference>, ReferencesErr> {
        let vector = self
            .embedder
            .embed(query)
            .await
            .map_err(ReferencesErr::Embedding)?;

        let hits = self.index.search(&vector, self.top_k)?;
        tracing::debug!(hits = hits.len(), "similarity search finished");

        // ids are the rank within this response, not a stable citation id
        Ok(hits
            .into_iter()
            .enumerate()
            .map(|(rank, hit)| Reference {
                id: rank.to_string(),
                text: hit.text,
                title: None,
            })
            .collect())
    }
}
