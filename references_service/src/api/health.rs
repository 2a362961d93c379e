use axum::{Router, routing::get};

async fn health_handler() -> &'static str {
    "healthy"
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_handler))
}
