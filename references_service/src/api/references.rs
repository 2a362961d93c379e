use crate::domain::{models::ReferencesErr, ports::ReferencesService};
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use models_references::{
    ErrorResponse, OasstErrorCode, OasstErrorResponse, Reference, ReferencesQuery,
};
use std::sync::Arc;
use thiserror::Error;


/// The references matching a query, best match first
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct ReferencesResponse(pub Vec<Reference>);

pub struct ReferencesRouterState<T> {
    service: Arc<T>,
}

impl<T> Clone for ReferencesRouterState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<T> ReferencesRouterState<T>
where
    T: ReferencesService,
{
    pub fn new(service: T) -> Self {
        ReferencesRouterState {
            service: Arc::new(service),
        }
    }
}

pub fn references_router<T, S>(state: ReferencesRouterState<T>) -> Router<S>
where
    T: ReferencesService,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/references", get(get_references_handler::<T>))
        .route("/references/", get(get_references_handler::<T>))
        .with_state(state)
}

#[derive(Debug, Error)]
pub enum ReferencesHandlerErr {
    #[error("{0}")]
    InvalidQuery(#[from] QueryRejection),
    #[error("Failed to fetch references.")]
    Failed(#[from] ReferencesErr),
}

impl IntoResponse for ReferencesHandlerErr {
    fn into_response(self) -> Response {
        match self {
            ReferencesHandlerErr::InvalidQuery(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    message: &rejection.body_text(),
                }),
            )
                .into_response(),
            ReferencesHandlerErr::Failed(ref e) => {
                tracing::error!(error=?e, "Failed to fetch references.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(OasstErrorResponse {
                        message: self.to_string(),
                        error_code: OasstErrorCode::FailedReferenceFetch,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Fetch the references closest to the query
#[utoipa::path(
    get,
    operation_id = "get_references",
    path = "/api/v1/references/",
    params(ReferencesQuery),
    responses(
            (status = 200, body=ReferencesResponse),
            (status = 403, body=OasstErrorResponse),
            (status = 422, body=ErrorResponse),
            (status = 500, body=OasstErrorResponse),
    )
)]
#[tracing::instrument(skip(state, params), fields(query, lang), err)]
pub async fn get_references_handler<T>(
    State(state): State<ReferencesRouterState<T>>,
    params: Result<Query<ReferencesQuery>, QueryRejection>,
) -> Result<Json<ReferencesResponse>, ReferencesHandlerErr>
where
    T: ReferencesService,
{
    let Query(ReferencesQuery { query, lang }) = params?;
    tracing::Span::current()
        .record("query", query.as_str())
        .record("lang", lang.as_str());

    let references = state.service.get_references(&query, &lang).await?;
    Ok(Json(ReferencesResponse(references)))
}
