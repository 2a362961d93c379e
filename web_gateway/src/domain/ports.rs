use models_references::BackendUser;
use references_service_client::ReferencesBackend;
use std::future::Future;

/// Maps the subject of a session token to the user the backend knows
#[cfg_attr(test, mockall::automock)]
pub trait UserResolver: Send + Sync + 'static {
    /// Returns `None` when no website user exists for `subject`
    fn resolve(
        &self,
        subject: &str,
    ) -> impl Future<Output = anyhow::Result<Option<BackendUser>>> + Send;
}

/// Builds backend clients acting on behalf of a single user
pub trait BackendClientFactory: Send + Sync + 'static {
    type Client: ReferencesBackend;

    fn client_for(&self, user: &BackendUser) -> anyhow::Result<Self::Client>;
}
