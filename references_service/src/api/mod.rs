use crate::{config::Config, domain::ports::ReferencesService};
use anyhow::Context;
use axum::Router;
use middleware::api_key::ApiKeyPolicy;
use references::{ReferencesRouterState, references_router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod health;
mod middleware;
mod references;
mod swagger;

pub async fn setup_and_serve<T>(config: &Config, service: T) -> anyhow::Result<()>
where
    T: ReferencesService,
{
    let policy = ApiKeyPolicy::new(config.api_key.clone(), config.allow_any_api_key);
    if config.allow_any_api_key {
        tracing::warn!("accepting any api key");
    }

    let app = api_router(ReferencesRouterState::new(service), policy)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // health is merged after the trace layer so probes are not logged
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("unable to bind listener")?;

    tracing::info!(
        "references service is up and running with environment {:?} on port {}",
        config.environment,
        config.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

fn api_router<T>(state: ReferencesRouterState<T>, policy: ApiKeyPolicy) -> Router
where
    T: ReferencesService,
{
    Router::new().nest(
        "/api/v1",
        references_router(state).layer(axum::middleware::from_fn_with_state(
            policy,
            middleware::api_key::handler,
        )),
    )
}
