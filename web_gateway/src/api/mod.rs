use crate::{
    auth::SessionValidator,
    config::Config,
    domain::ports::{BackendClientFactory, UserResolver},
};
use anyhow::Context;
use axum::{Router, routing::any};
use references::references_handler;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

mod health;
mod locale;
mod references;

/// Everything the website's api routes need
pub struct GatewayState<U, F> {
    pub sessions: SessionValidator,
    pub users: Arc<U>,
    pub clients: Arc<F>,
}

// derive(Clone) would require U: Clone and F: Clone
impl<U, F> Clone for GatewayState<U, F> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            users: self.users.clone(),
            clients: self.clients.clone(),
        }
    }
}

impl<U, F> GatewayState<U, F>
where
    U: UserResolver,
    F: BackendClientFactory,
{
    pub fn new(sessions: SessionValidator, users: U, clients: F) -> Self {
        Self {
            sessions,
            users: Arc::new(users),
            clients: Arc::new(clients),
        }
    }
}

pub async fn setup_and_serve<U, F>(config: &Config, state: GatewayState<U, F>) -> anyhow::Result<()>
where
    U: UserResolver,
    F: BackendClientFactory,
{
    let app = gateway_router(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .merge(health::router());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("unable to bind listener")?;

    tracing::info!(
        "web gateway is up and running with environment {:?} on port {}",
        config.environment,
        config.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

/// `any` so that non GET methods reach the handler and get the json 405
fn gateway_router<U, F>(state: GatewayState<U, F>) -> Router
where
    U: UserResolver,
    F: BackendClientFactory,
{
    Router::new()
        .route("/api/references", any(references_handler::<U, F>))
        .with_state(state)
}
