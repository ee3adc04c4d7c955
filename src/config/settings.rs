//! Resolver settings
//!
//! Settings that parameterize the resolver itself: the active tier, the
//! fixed sender addresses handed to the mail transport, and logging.
//! Plugin credentials never live here; they stay in the environment.

use crate::config::Tier;
use serde::{Deserialize, Serialize};

// Helper functions for serde defaults
fn default_from_address() -> String {
    "hello@example.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level resolver settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Resolver behavior
    #[serde(default)]
    pub resolver: ResolverSettings,
    /// Outgoing email settings
    #[serde(default)]
    pub email: EmailSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Tier selection and resolution behavior
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResolverSettings {
    /// Active deployment tier
    #[serde(default)]
    pub tier: Tier,
}

/// Fixed sender identities declared to the mail transport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailSettings {
    /// Default From address
    #[serde(default = "default_from_address")]
    pub default_from: String,
    /// Default Reply-To address
    #[serde(default = "default_from_address")]
    pub default_reply_to: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            default_from: default_from_address(),
            default_reply_to: default_from_address(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    ///
    /// Only resolver-level knobs are read here; plugin credentials are
    /// looked up later against the same kind of snapshot during resolution.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_env_source(&crate::config::EnvSource::from_process())
    }

    /// Load settings from an environment snapshot
    pub fn from_env_source(env: &crate::config::EnvSource) -> crate::Result<Self> {
        let mut settings = Self::default();

        settings.resolver.tier = Tier::from_env_source(env)?;

        if let Some(level) = env.get("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Some(verbose) = env.get("VERBOSE") {
            settings.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(settings)
    }

    /// Load settings from a TOML configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;

        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;
        let defaults = Self::default();

        // Merge only non-default values from environment
        if env_settings.resolver.tier != defaults.resolver.tier {
            self.resolver.tier = env_settings.resolver.tier;
        }

        if env_settings.logging.level != defaults.logging.level {
            self.logging.level = env_settings.logging.level;
        }

        if env_settings.logging.verbose != defaults.logging.verbose {
            self.logging.verbose = env_settings.logging.verbose;
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "logging.level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        // Sender addresses must at least look like addresses; the transport
        // rejects anything worse at delivery time.
        for (name, address) in [
            ("email.default_from", &self.email.default_from),
            ("email.default_reply_to", &self.email.default_reply_to),
        ] {
            if !address.contains('@') {
                return Err(crate::Error::config(
                    name,
                    &format!("Invalid sender address: {}", address),
                ));
            }
        }

        Ok(())
    }
}
