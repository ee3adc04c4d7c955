//! Outgoing email transport configuration
//!
//! Parameterizes the nodemailer transport plugin. Host and port fall back
//! to Gmail SMTP defaults when unset; auth credentials have no fallback and
//! the transport rejects their absence at delivery time.

use crate::{Error, Result, config::EnvSource, config::settings::EmailSettings};
use serde::Serialize;

/// Provider identifier the framework uses to select the mail plugin
pub const PROVIDER: &str = "nodemailer";

/// SMTP host used when SMTP_HOST is unset
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// SMTP port used when SMTP_PORT is unset
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Email plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    /// Mail transport plugin name
    pub provider: String,
    /// Transport-specific options
    pub provider_options: TransportOptions,
    /// Sender identity settings
    pub settings: SenderSettings,
}

/// SMTP transport options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportOptions {
    /// SMTP host (SMTP_HOST)
    pub host: String,
    /// SMTP port (SMTP_PORT)
    pub port: u16,
    /// Transport credentials
    pub auth: SmtpAuth,
}

/// SMTP credentials; absent variables leave the fields unset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmtpAuth {
    /// Login user (SMTP_USERNAME)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Login password (SMTP_PASSWORD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
}

/// Default sender identities declared to the framework
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderSettings {
    /// Default From address
    pub default_from: String,
    /// Default Reply-To address
    pub default_reply_to: String,
}

impl EmailConfig {
    /// Resolve email configuration from the environment snapshot
    ///
    /// Fails only when SMTP_PORT is present but not a number.
    pub fn resolve(env: &EnvSource, sender: &EmailSettings) -> Result<Self> {
        Ok(Self {
            provider: PROVIDER.to_string(),
            provider_options: TransportOptions {
                host: env.get_or("SMTP_HOST", DEFAULT_SMTP_HOST),
                port: env.get_u16_or("SMTP_PORT", DEFAULT_SMTP_PORT)?,
                auth: SmtpAuth {
                    user: env.get("SMTP_USERNAME"),
                    pass: env.get("SMTP_PASSWORD"),
                },
            },
            settings: SenderSettings {
                default_from: sender.default_from.clone(),
                default_reply_to: sender.default_reply_to.clone(),
            },
        })
    }

    /// Check what the transport would reject at connection time
    pub fn validate(&self) -> Result<()> {
        if self.provider_options.port == 0 {
            return Err(Error::validation("SMTP_PORT", "port cannot be 0"));
        }
        if self.provider_options.host.is_empty() {
            return Err(Error::validation("SMTP_HOST", "host cannot be empty"));
        }
        Ok(())
    }

    /// Credential variables that were unset during resolution
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.provider_options.auth.user.is_none() {
            missing.push("SMTP_USERNAME");
        }
        if self.provider_options.auth.pass.is_none() {
            missing.push("SMTP_PASSWORD");
        }
        missing
    }
}
