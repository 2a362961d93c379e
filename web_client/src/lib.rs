//! Client side access to the website's references route: a fetcher for
//! `/api/references`, a keyed cache with request deduplication and the
//! button that triggers a lookup.

pub mod button;
pub mod fetcher;
pub mod use_references;

pub use button::{ButtonProps, ButtonSize, ButtonVariant, ReferencesButton};
pub use fetcher::{Fetcher, GatewayFetcher};
pub use use_references::{CacheKey, REFERENCES_PATH, ReferencesCache, ReferencesState};
