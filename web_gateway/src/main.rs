use anyhow::Context;
use api::GatewayState;
use auth::SessionValidator;
use config::{Config, Environment};
use oasst_entrypoint::OasstEntrypoint;
use outbound::{api_client_factory::OasstApiClientFactory, pg_user_resolver::PgUserResolver};
use sqlx::postgres::PgPoolOptions;

mod api;
mod auth;
mod config;
mod domain;
mod outbound;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    OasstEntrypoint::default().init();

    let config = Config::from_env().context("expected to be able to generate config")?;
    tracing::trace!("initialized config");

    let db = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    if config.environment == Environment::Local {
        let migrations = std::path::PathBuf::from(&*config.migrations_path);
        let migrator = sqlx::migrate::Migrator::new(migrations)
            .await
            .context("unable to read migrations")?;
        migrator.run(&db).await.context("unable to run migrations")?;
        tracing::info!("applied migrations");
    }

    let state = GatewayState::new(
        SessionValidator::new(config.nextauth_secret.clone(), config.environment),
        PgUserResolver::new(db),
        OasstApiClientFactory::new(config.backend.clone()),
    );

    api::setup_and_serve(&config, state).await
}
