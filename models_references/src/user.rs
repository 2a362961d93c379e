use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// How a website user authenticated, which determines the id the backend knows them by
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuthMethod {
    Local,
    Discord,
    Google,
}

/// The identity of a website user as the backend recognizes it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct BackendUser {
    pub id: String,
    pub display_name: String,
    pub auth_method: AuthMethod,
}

impl BackendUser {
    /// Value of the `x-oasst-user` header identifying this user to the backend
    pub fn header_value(&self) -> String {
        format!("{}:{}", self.auth_method, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_prefixes_auth_method() {
        let user = BackendUser {
            id: "1234".to_string(),
            display_name: "someone".to_string(),
            auth_method: AuthMethod::Discord,
        };
        assert_eq!(user.header_value(), "discord:1234");
    }

    #[test]
    fn auth_method_parses_from_provider_name() {
        assert_eq!("google".parse::<AuthMethod>().unwrap(), AuthMethod::Google);
        assert!("github".parse::<AuthMethod>().is_err());
    }
}
