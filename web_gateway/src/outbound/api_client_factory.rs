use crate::{config::BackendEnv, domain::ports::BackendClientFactory};
use models_references::BackendUser;
use references_service_client::OasstApiClient;

/// Builds [OasstApiClient]s against the configured backend
#[derive(Clone, Debug)]
pub struct OasstApiClientFactory {
    backend: BackendEnv,
}

impl OasstApiClientFactory {
    pub fn new(backend: BackendEnv) -> Self {
        Self { backend }
    }
}

impl BackendClientFactory for OasstApiClientFactory {
    type Client = OasstApiClient;

    fn client_for(&self, user: &BackendUser) -> anyhow::Result<OasstApiClient> {
        OasstApiClient::new(
            &self.backend.oasst_api_url,
            &self.backend.oasst_api_key,
            user,
        )
    }
}
