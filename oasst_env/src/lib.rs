#![deny(missing_docs)]
//! Typed access to the runtime environment of the references services.
//!
//! [Environment] tells a binary which deployment it is running in, and the
//! [env_var] macro declares sentinel types for the variables a binary reads.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

mod var;

pub use var::{VarNameErr, read_env};

#[doc(hidden)]
pub use paste;

#[cfg(test)]
pub(crate) use var::with_mock_env;

#[cfg(test)]
mod tests;

mod environment_var {
    crate::env_var!(
        #[derive(Clone)]
        pub struct Environment;
    );
}

/// The deployment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production deployment
    Production,
    /// Shared development deployment
    Develop,
    /// The server is running on localhost
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvErr {
    /// The `ENVIRONMENT` variable could not be read
    #[error("{0}")]
    VarErr(#[from] VarNameErr),
    /// The value was not recognized as a valid environment
    #[error("{0}")]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Attempt to read the [Environment] from the `ENVIRONMENT` variable
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvErr> {
        let v = environment_var::Environment::new()?;
        Ok(Self::from_str(&v)?)
    }

    /// Read the [Environment], falling back to production if it is missing or invalid
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// A value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
