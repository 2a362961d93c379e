#![deny(missing_docs)]
//! Shared initialization for the binaries of this workspace: dotenv loading,
//! the tracing panic hook, and the tracing subscriber appropriate for the
//! current [Environment].

use oasst_env::Environment;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};
use tracing_tree::HierarchicalLayer;

/// Describes how a binary should be initialized
#[derive(Debug)]
pub struct OasstEntrypoint {
    env: Environment,
    /// options that only apply in local dev
    local: LocalOptions,
}

impl Default for OasstEntrypoint {
    fn default() -> Self {
        OasstEntrypoint {
            env: Environment::new_or_prod(),
            local: Default::default(),
        }
    }
}

/// Proof that [OasstEntrypoint::init] was called
#[derive(Debug)]
pub struct InitializedEntrypoint {
    env: Environment,
}

impl InitializedEntrypoint {
    /// The environment the binary was initialized for
    pub fn environment(&self) -> Environment {
        self.env
    }
}

impl OasstEntrypoint {
    /// create a new instance for an explicit [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            ..Default::default()
        }
    }

    /// consume self and install the global tracing subscriber
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match (self.env, self.local) {
            (Environment::Local, LocalOptions { tree_tracing: None }) => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            (
                Environment::Local,
                LocalOptions {
                    tree_tracing: Some(indent),
                },
            ) => {
                let subscriber = Registry::default()
                    .with(EnvFilter::from_default_env())
                    .with(HierarchicalLayer::new(indent));
                if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
                    eprintln!("unable to install tree tracing subscriber: {e}");
                }
            }
            (Environment::Production | Environment::Develop, _) => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint { env: self.env }
    }

    /// begin modifying the options for the local environment
    pub fn local(self) -> LocalOptionsBuilder {
        LocalOptionsBuilder {
            prev: self,
            next: Default::default(),
        }
    }
}

/// builder for the local environment options
pub struct LocalOptionsBuilder {
    prev: OasstEntrypoint,
    next: LocalOptions,
}

impl LocalOptionsBuilder {
    /// use a hierarchical tree layer with the given indent instead of pretty output
    pub fn tree_tracing(mut self, indent: Option<usize>) -> Self {
        self.next.tree_tracing = indent;
        self
    }

    /// finish modifying the options for the local environment
    pub fn build(self) -> OasstEntrypoint {
        OasstEntrypoint {
            env: self.prev.env,
            local: self.next,
        }
    }
}

#[derive(Debug, Default)]
struct LocalOptions {
    tree_tracing: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_builder_keeps_environment() {
        let entry = OasstEntrypoint::new(Environment::Local)
            .local()
            .tree_tracing(Some(2))
            .build();

        assert_eq!(entry.env, Environment::Local);
        assert_eq!(entry.local.tree_tracing, Some(2));
    }

    #[test]
    fn new_has_no_local_options() {
        let entry = OasstEntrypoint::new(Environment::Develop);
        assert_eq!(entry.env, Environment::Develop);
        assert!(entry.local.tree_tracing.is_none());
    }
}
