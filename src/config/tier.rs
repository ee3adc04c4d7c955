//! Environment tiers
//!
//! A tier is a named deployment profile selecting a configuration variant.
//! The development tier opens up the GraphQL surface and uses the endpoint
//! form of the upload provider options; production keeps both locked down.

use crate::{Error, config::EnvSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable that selects the active tier
pub const TIER_ENV_VAR: &str = "CMS_TIER";

/// Deployment profile for the resolved configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Local development profile
    Development,
    /// Default profile for deployed environments
    #[default]
    Production,
}

impl Tier {
    /// Read the tier from an environment snapshot, defaulting to production
    pub fn from_env_source(env: &EnvSource) -> crate::Result<Self> {
        match env.get(TIER_ENV_VAR) {
            Some(raw) => raw.parse(),
            None => Ok(Self::Production),
        }
    }

    /// Whether this is the development profile
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(Error::config(
                "tier",
                &format!("unknown tier '{}', expected 'development' or 'production'", other),
            )),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}
