use super::references::{self, ReferencesResponse};
use models_references::{ErrorResponse, OasstErrorResponse, Reference};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
        paths(references::get_references_handler),
        components(
            schemas(
                Reference,
                ReferencesResponse,
                ErrorResponse,
                OasstErrorResponse,
            ),
        ),
        tags(
            (name = "references", description = "Citation lookup for the website")
        )
    )]
pub struct ApiDoc;
