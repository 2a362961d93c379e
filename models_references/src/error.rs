use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plain json error response for use with axum.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse<'a> {
    /// Message to explain failure
    pub message: &'a str,
}

/// Error codes reported by the backend api alongside the message
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(into = "u16", try_from = "u16")]
pub enum OasstErrorCode {
    ApiKeyMissing = 4001,
    ApiKeyInvalid = 4002,
    FailedReferenceFetch = 1008,
}

impl From<OasstErrorCode> for u16 {
    fn from(code: OasstErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for OasstErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            4001 => Ok(OasstErrorCode::ApiKeyMissing),
            4002 => Ok(OasstErrorCode::ApiKeyInvalid),
            1008 => Ok(OasstErrorCode::FailedReferenceFetch),
            other => Err(format!("unknown error code {other}")),
        }
    }
}

/// Error body returned by the backend api
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct OasstErrorResponse {
    pub message: String,
    #[schema(value_type = u16)]
    pub error_code: OasstErrorCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_serializes_as_number() {
        let body = OasstErrorResponse {
            message: "Failed to fetch references.".to_string(),
            error_code: OasstErrorCode::FailedReferenceFetch,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"message": "Failed to fetch references.", "error_code": 1008})
        );
    }

    #[test]
    fn unknown_error_code_is_rejected() {
        let res = serde_json::from_str::<OasstErrorResponse>(r#"{"message":"x","error_code":1}"#);
        assert!(res.is_err());
    }
}
