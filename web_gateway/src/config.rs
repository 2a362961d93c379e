use anyhow::Context;
pub use oasst_env::Environment;
use oasst_env::env_var;

env_var! {
    #[derive(Clone, Debug)]
    pub struct BackendEnv {
        #[derive(Clone)]
        pub OasstApiUrl,
        #[derive(Clone)]
        pub OasstApiKey,
    }
}

env_var!(
    #[derive(Clone)]
    pub struct NextauthSecret;
);

env_var!(
    #[derive(Clone)]
    pub struct DatabaseUrl;
);

env_var!(
    #[derive(Clone)]
    pub struct MigrationsPath;
);

/// The configuration parameters for the website gateway, read from the environment
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// The environment we are in
    pub environment: Environment,
    /// Base url and api key of the backend api
    pub backend: BackendEnv,
    /// Secret the session tokens are signed with
    pub nextauth_secret: NextauthSecret,
    /// The website database holding users and their linked accounts
    pub database_url: DatabaseUrl,
    /// Directory of sql migrations applied on startup in local development
    pub migrations_path: MigrationsPath,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            environment: Environment::new_or_prod(),
            backend: BackendEnv::new()?,
            nextauth_secret: NextauthSecret::new()?,
            database_url: DatabaseUrl::new()?,
            migrations_path: MigrationsPath::new_or("migrations"),
        })
    }
}
