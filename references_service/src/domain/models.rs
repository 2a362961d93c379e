use thiserror::Error;

/// Number of references returned for a query
pub const DEFAULT_TOP_K: usize = 5;

/// A chunk of a citation together with its embedding vector
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Citation {
    pub chunk: String,
    pub embeddings: Vec<f32>,
}

/// A chunk returned by the index with its inner product score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    pub text: String,
    pub score: f32,
}

#[derive(Debug, Error)]
pub enum IndexErr {
    #[error("the citation index is empty")]
    Empty,
    #[error("citation {position} has dimension {found}, expected {expected}")]
    InconsistentDimension {
        position: usize,
        expected: usize,
        found: usize,
    },
    #[error("query vector has dimension {found}, index has dimension {expected}")]
    QueryDimension { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum ReferencesErr {
    #[error("unable to embed the query")]
    Embedding(#[source] anyhow::Error),
    #[error("unable to search the citation index")]
    Search(#[from] IndexErr),
}
