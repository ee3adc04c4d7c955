//! Plugin configuration records
//!
//! The hosting framework consumes a nested mapping of plugin name to
//! settings object. This module builds that mapping from an environment
//! snapshot and the resolver settings: resolution is pure value
//! construction, so the same inputs always produce the same mapping.
//!
//! Missing credentials are never an error here. The external provider
//! rejects them at its own initialization time, which is where the
//! framework reports them.

pub mod email;
pub mod graphql;
pub mod upload;

pub use email::EmailConfig;
pub use graphql::GraphqlConfig;
pub use upload::UploadConfig;

use crate::{
    Result,
    config::{EnvSource, Settings},
};
use serde::Serialize;

/// Wrapper producing the `{ "config": { ... } }` nesting the framework expects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugin<T> {
    /// Plugin-specific options
    pub config: T,
}

impl<T> Plugin<T> {
    fn new(config: T) -> Self {
        Self { config }
    }
}

/// The full plugin configuration mapping
///
/// Exactly three plugins are configured: upload storage, GraphQL, and
/// outgoing email. Each entry parameterizes an external plugin selected by
/// its string identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginsConfig {
    /// Upload storage provider
    pub upload: Plugin<UploadConfig>,
    /// GraphQL endpoint options
    pub graphql: Plugin<GraphqlConfig>,
    /// Outgoing email transport
    pub email: Plugin<EmailConfig>,
}

impl PluginsConfig {
    /// Resolve the plugin configuration against an environment snapshot
    ///
    /// The only failure mode is a present-but-malformed numeric variable
    /// (SMTP_PORT); absent variables simply leave their fields unset.
    pub fn resolve(env: &EnvSource, settings: &Settings) -> Result<Self> {
        let tier = settings.resolver.tier;

        Ok(Self {
            upload: Plugin::new(UploadConfig::resolve(env, tier)),
            graphql: Plugin::new(GraphqlConfig::for_tier(tier)),
            email: Plugin::new(EmailConfig::resolve(env, &settings.email)?),
        })
    }

    /// Validate what the external plugins would reject at their own startup
    ///
    /// Never called by [`resolve`](Self::resolve); the resolver itself
    /// constructs values without judging them.
    pub fn validate(&self) -> Result<()> {
        self.upload.config.validate()?;
        self.email.config.validate()?;
        Ok(())
    }

    /// Environment variables that were unset during resolution
    ///
    /// Reported for operator visibility; the deferred failure itself happens
    /// inside the external plugins.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = self.upload.config.missing_credentials();
        missing.extend(self.email.config.missing_credentials());
        missing
    }

    /// Serialize to the JSON value handed to the framework
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a compact JSON string
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
