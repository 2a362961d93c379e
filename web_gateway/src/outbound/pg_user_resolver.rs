use crate::domain::ports::UserResolver;
use anyhow::Context;
use models_references::{AuthMethod, BackendUser};
use sqlx::{Pool, Postgres};

/// Resolves website users from the website database.
///
/// A user who linked a discord or google account is known to the backend by
/// that provider's account id; everyone else by their website id.
#[derive(Clone, Debug)]
pub struct PgUserResolver {
    db: Pool<Postgres>,
}

impl PgUserResolver {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

#[derive(sqlx::FromRow, Debug)]
struct UserAccountRow {
    id: String,
    name: Option<String>,
    provider: Option<String>,
    provider_account_id: Option<String>,
}

impl TryFrom<UserAccountRow> for BackendUser {
    type Error = anyhow::Error;

    fn try_from(row: UserAccountRow) -> Result<Self, Self::Error> {
        let display_name = row.name.unwrap_or_default();
        match (row.provider, row.provider_account_id) {
            (Some(provider), Some(provider_account_id)) => Ok(BackendUser {
                id: provider_account_id,
                display_name,
                auth_method: provider
                    .parse::<AuthMethod>()
                    .with_context(|| format!("unsupported account provider {provider}"))?,
            }),
            _ => Ok(BackendUser {
                id: row.id,
                display_name,
                auth_method: AuthMethod::Local,
            }),
        }
    }
}

impl UserResolver for PgUserResolver {
    #[tracing::instrument(skip(self), err)]
    async fn resolve(&self, subject: &str) -> anyhow::Result<Option<BackendUser>> {
        let row = sqlx::query_as::<_, UserAccountRow>(
            r#"
            SELECT
                u.id,
                u.name,
                a.provider,
                a."providerAccountId" AS provider_account_id
            FROM "User" u
            LEFT JOIN "Account" a
                ON a."userId" = u.id AND a.provider IN ('discord', 'google')
            WHERE u.id = $1
            ORDER BY a.provider NULLS LAST
            LIMIT 1
            "#,
        )
        .bind(subject)
        .fetch_optional(&self.db)
        .await
        .context("unable to look up website user")?;

        row.map(BackendUser::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(provider: Option<&str>, provider_account_id: Option<&str>) -> UserAccountRow {
        UserAccountRow {
            id: "cl9website".to_string(),
            name: Some("Tester".to_string()),
            provider: provider.map(str::to_string),
            provider_account_id: provider_account_id.map(str::to_string),
        }
    }

    #[test]
    fn users_without_accounts_are_local() {
        let user = BackendUser::try_from(row(None, None)).unwrap();
        assert_eq!(user.id, "cl9website");
        assert_eq!(user.auth_method, AuthMethod::Local);
        assert_eq!(user.display_name, "Tester");
    }

    #[test]
    fn linked_accounts_use_the_provider_id() {
        let user = BackendUser::try_from(row(Some("discord"), Some("81234"))).unwrap();
        assert_eq!(user.id, "81234");
        assert_eq!(user.auth_method, AuthMethod::Discord);
    }

    #[test]
    fn unknown_providers_are_errors() {
        assert!(BackendUser::try_from(row(Some("github"), Some("1"))).is_err());
    }

    #[test]
    fn missing_name_is_empty() {
        let mut r = row(None, None);
        r.name = None;
        assert_eq!(BackendUser::try_from(r).unwrap().display_name, "");
    }
}
