use super::*;
use crate::{
    domain::{
        models::{Citation, IndexErr, ScoredChunk},
        ports::{MockEmbedder, MockReferenceIndex},
    },
    outbound::flat_index::FlatIpIndex,
};

fn embedder_returning(vector: Vec<f32>) -> MockEmbedder {
    let mut embedder = MockEmbedder::new();
    embedder.expect_embed().returning(move |_text| {
        let vector = vector.clone();
        Box::pin(async move { Ok(vector) })
    });
    embedder
}

fn citation(chunk: &str, embeddings: &[f32]) -> Citation {
    Citation {
        chunk: chunk.to_string(),
        embeddings: embeddings.to_vec(),
    }
}

#[tokio::test]
async fn it_ranks_by_inner_product() {
    let index = FlatIpIndex::from_citations(vec![
        citation("orthogonal", &[0.0, 1.0]),
        citation("aligned", &[1.0, 0.0]),
        citation("half", &[0.5, 0.5]),
    ])
    .unwrap();
    let service = ReferencesServiceImpl::new(embedder_returning(vec![1.0, 0.0]), index);

    let refs = service
        .get_references("anything", &Locale::default())
        .await
        .unwrap();

    let texts: Vec<&str> = refs.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["aligned", "half", "orthogonal"]);
    let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2"]);
    assert!(refs.iter().all(|r| r.title.is_none()));
}

#[tokio::test]
async fn it_returns_at_most_top_k() {
    let citations = (0..8)
        .map(|i| citation(&format!("chunk {i}"), &[i as f32]))
        .collect();
    let index = FlatIpIndex::from_citations(citations).unwrap();
    let service = ReferencesServiceImpl::new(embedder_returning(vec![1.0]), index);

    let refs = service
        .get_references("q", &Locale::default())
        .await
        .unwrap();

    assert_eq!(refs.len(), DEFAULT_TOP_K);
    assert_eq!(refs[0].text, "chunk 7");
    assert_eq!(refs[4].text, "chunk 3");
}

#[tokio::test]
async fn it_passes_the_query_text_to_the_embedder() {
    let mut embedder = MockEmbedder::new();
    embedder
        .expect_embed()
        .withf(|text| text == "hvað er rust")
        .times(1)
        .returning(|_| Box::pin(async { Ok(vec![1.0]) }));

    let mut index = MockReferenceIndex::new();
    index
        .expect_search()
        .withf(|query, k| query.to_vec() == vec![1.0] && *k == 2)
        .times(1)
        .returning(|_, _| {
            Ok(vec![ScoredChunk {
                text: "Rust er forritunarmál".to_string(),
                score: 0.9,
            }])
        });

    let service = ReferencesServiceImpl::new(embedder, index).with_top_k(2);
    let refs = service
        .get_references("hvað er rust", &Locale::parse("is").unwrap())
        .await
        .unwrap();

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].id, "0");
}

#[tokio::test]
async fn embedding_failures_are_reported() {
    let mut embedder = MockEmbedder::new();
    embedder
        .expect_embed()
        .returning(|_| Box::pin(async { Err(anyhow::anyhow!("connection refused")) }));
    let mut index = MockReferenceIndex::new();
    index.expect_search().never();

    let service = ReferencesServiceImpl::new(embedder, index);
    let err = service
        .get_references("q", &Locale::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ReferencesErr::Embedding(_)));
}

#[tokio::test]
async fn dimension_mismatch_is_a_search_error() {
    let index = FlatIpIndex::from_citations(vec![citation("a", &[1.0, 0.0])]).unwrap();
    let service = ReferencesServiceImpl::new(embedder_returning(vec![1.0, 0.0, 0.0]), index);

    let err = service
        .get_references("q", &Locale::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReferencesErr::Search(IndexErr::QueryDimension {
            expected: 2,
            found: 3
        })
    ));
}
