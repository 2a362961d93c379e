use crate::fetcher::Fetcher;
use dashmap::DashMap;
use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
};
use models_references::Locale;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// The website route references are fetched from
pub static REFERENCES_PATH: &str = "/api/references";

/// Identifies one cached lookup. A new query or locale is a new key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: &'static str,
    pub query: String,
    pub locale: Locale,
}

impl CacheKey {
    /// `None` for an absent or empty query, meaning there is nothing to fetch
    pub fn new(query: Option<&str>, locale: &Locale) -> Option<Self> {
        let query = query.filter(|q| !q.is_empty())?;
        Some(Self {
            path: REFERENCES_PATH,
            query: query.to_string(),
            locale: locale.clone(),
        })
    }
}

/// Snapshot of a cache entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencesState {
    /// The last payload fetched successfully
    pub data: Option<serde_json::Value>,
    /// Whether the most recent fetch failed
    pub error: bool,
    pub is_validating: bool,
}

type InFlight = Shared<BoxFuture<'static, Result<serde_json::Value, Arc<anyhow::Error>>>>;

#[derive(Default)]
struct Entry {
    data: Option<serde_json::Value>,
    error: bool,
    in_flight: Option<(u64, InFlight)>,
}

impl Entry {
    fn state(&self) -> ReferencesState {
        ReferencesState {
            data: self.data.clone(),
            error: self.error,
            is_validating: self.in_flight.is_some(),
        }
    }
}

/// Stale-while-revalidate cache for the references route.
///
/// Callers asking for the same key while a fetch is running share it.
/// Settled entries are served from memory until [ReferencesCache::mutate] is
/// called; failures are kept as they are and never retried on their own.
pub struct ReferencesCache<F> {
    fetcher: Arc<F>,
    entries: Arc<DashMap<CacheKey, Entry>>,
    generation: Arc<AtomicU64>,
}

impl<F> Clone for ReferencesCache<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            entries: self.entries.clone(),
            generation: self.generation.clone(),
        }
    }
}

impl<F: Fetcher> ReferencesCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            entries: Arc::new(DashMap::new()),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The references for `query` in `locale`.
    ///
    /// An absent or empty query fetches nothing and yields the empty state.
    pub async fn use_references(&self, query: Option<&str>, locale: &Locale) -> ReferencesState {
        let Some(key) = CacheKey::new(query, locale) else {
            return ReferencesState::default();
        };

        let settled = self
            .entries
            .get(&key)
            .filter(|entry| entry.in_flight.is_none())
            .map(|entry| entry.state());
        if let Some(state) = settled {
            tracing::trace!(?key, "serving cached references");
            return state;
        }

        self.revalidate(key).await
    }

    /// Refetch `key`, joining a fetch that is already running
    pub async fn mutate(&self, key: &CacheKey) -> ReferencesState {
        self.revalidate(key.clone()).await
    }

    /// Current state of `key` without fetching
    pub fn state(&self, key: &CacheKey) -> ReferencesState {
        self.entries
            .get(key)
            .map(|entry| entry.state())
            .unwrap_or_default()
    }

    async fn revalidate(&self, key: CacheKey) -> ReferencesState {
        let (generation, request) = {
            let mut entry = self.entries.entry(key.clone()).or_default();
            match entry.in_flight.clone() {
                Some(in_flight) => in_flight,
                None => {
                    let generation = self.generation.fetch_add(1, Ordering::Relaxed);
                    let request = self.request(key.clone());
                    entry.in_flight = Some((generation, request.clone()));
                    (generation, request)
                }
            }
        };

        let result = request.await;

        let mut entry = self.entries.entry(key.clone()).or_default();
        // every caller sharing the request settles it, only the first one writes
        if matches!(&entry.in_flight, Some((g, _)) if *g == generation) {
            entry.in_flight = None;
            match result {
                Ok(data) => {
                    entry.data = Some(data);
                    entry.error = false;
                }
                Err(e) => {
                    tracing::warn!(?key, error = ?e, "unable to fetch references");
                    entry.error = true;
                }
            }
        }
        entry.state()
    }

    fn request(&self, key: CacheKey) -> InFlight {
        let fetcher = self.fetcher.clone();
        async move {
            tracing::debug!(?key, "fetching references");
            fetcher.get(&key).await.map_err(Arc::new)
        }
        .boxed()
        .shared()
    }
}
