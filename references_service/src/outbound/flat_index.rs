use crate::domain::{
    models::{Citation, IndexErr, ScoredChunk},
    ports::ReferenceIndex,
};
use anyhow::Context;
use std::cmp::Ordering;

/// Exhaustive inner product index over every citation chunk held in memory
#[derive(Debug)]
pub struct FlatIpIndex {
    dimension: usize,
    citations: Vec<Citation>,
}

impl FlatIpIndex {
    pub fn from_citations(citations: Vec<Citation>) -> Result<Self, IndexErr> {
        let dimension = citations.first().ok_or(IndexErr::Empty)?.embeddings.len();
        if dimension == 0 {
            return Err(IndexErr::Empty);
        }

        if let Some((position, citation)) = citations
            .iter()
            .enumerate()
            .find(|(_, c)| c.embeddings.len() != dimension)
        {
            return Err(IndexErr::InconsistentDimension {
                position,
                expected: dimension,
                found: citation.embeddings.len(),
            });
        }

        Ok(FlatIpIndex {
            dimension,
            citations,
        })
    }

    /// Load a JSON array of `{ "chunk": .., "embeddings": [..] }` records
    #[tracing::instrument(err)]
    pub async fn load(path: &str) -> anyhow::Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .context("unable to read citations file")?;
        let citations: Vec<Citation> =
            serde_json::from_slice(&bytes).context("unable to parse citations file")?;
        Ok(Self::from_citations(citations)?)
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl ReferenceIndex for FlatIpIndex {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredChunk>, IndexErr> {
        if query.len() != self.dimension {
            return Err(IndexErr::QueryDimension {
                expected: self.dimension,
                found: query.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = self
            .citations
            .iter()
            .enumerate()
            .map(|(i, c)| (i, inner_product(query, &c.embeddings)))
            .collect();

        // ties keep corpus order
        scored.sort_by(|(ia, a), (ib, b)| {
            b.partial_cmp(a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| ia.cmp(ib))
        });

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(i, score)| ScoredChunk {
                text: self.citations[i].chunk.clone(),
                score,
            })
            .collect())
    }
}
