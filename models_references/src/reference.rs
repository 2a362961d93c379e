use crate::Locale;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A citation-like record matched against a query
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Reference {
    /// Rank of the reference within the result, as a string
    pub id: String,
    /// The matched chunk of text
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Query parameters accepted by the backend references endpoint
#[derive(Serialize, Deserialize, Debug, Clone, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReferencesQuery {
    /// The search query string
    pub query: String,
    /// Language code, e.g. 'is' or 'en'
    #[serde(default)]
    #[param(value_type = Option<String>)]
    #[schema(value_type = Option<String>)]
    pub lang: Locale,
}
