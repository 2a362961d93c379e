pub mod flat_index;
pub mod http_embedder;
