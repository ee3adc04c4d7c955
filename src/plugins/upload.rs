//! Upload storage provider configuration
//!
//! Parameterizes the Cloudflare R2 storage provider plugin. Credentials and
//! bucket parameters come straight from the environment snapshot with no
//! inline defaults; unset variables leave their fields out of the serialized
//! mapping and the provider reports them at its own initialization.
//!
//! The provider option schema is not the same in both tiers: development
//! addresses the bucket through an explicit endpoint and
//! `cloudflarePublicAccessUrl`, while production uses `region` plus
//! `accountId`/`publicUrl` bucket parameters. Both forms are reproduced as
//! the framework consumes them.

use crate::{Error, Result, config::EnvSource, config::Tier};
use serde::Serialize;

/// Provider identifier the framework uses to select the storage plugin
pub const PROVIDER: &str = "strapi-provider-cloudflare-r2";

/// Extension point for per-action provider options; empty today
pub type ActionOptionsBag = serde_json::Map<String, serde_json::Value>;

/// Upload plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Storage provider plugin name
    pub provider: String,
    /// Provider-specific options
    pub provider_options: ProviderOptions,
    /// Enabled provider actions
    pub action_options: ActionOptions,
}

/// Options handed to the storage provider
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
    /// R2 access key id (R2_ACCESS_KEY_ID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// R2 secret access key (R2_ACCESS_SECRET)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    /// Bucket region (R2_REGION), production form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Account endpoint URL (R2_ENDPOINT), development form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Bucket parameters
    pub params: BucketParams,
    /// Public access URL (R2_PUBLIC_URL), development form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudflare_public_access_url: Option<String>,
}

/// Bucket addressing parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketParams {
    /// Bucket name (R2_BUCKET); capitalized key per the provider contract
    #[serde(rename = "Bucket", skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Account identifier (R2_ACCOUNT_ID), production form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Public access URL (R2_PUBLIC_URL), production form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

/// Provider actions the framework is allowed to call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOptions {
    /// Single-shot upload
    pub upload: ActionOptionsBag,
    /// Streamed upload
    pub upload_stream: ActionOptionsBag,
    /// Object deletion
    pub delete: ActionOptionsBag,
}

impl UploadConfig {
    /// Resolve upload configuration for the given tier
    pub fn resolve(env: &EnvSource, tier: Tier) -> Self {
        let mut options = ProviderOptions {
            access_key_id: env.get("R2_ACCESS_KEY_ID"),
            secret_access_key: env.get("R2_ACCESS_SECRET"),
            params: BucketParams {
                bucket: env.get("R2_BUCKET"),
                ..BucketParams::default()
            },
            ..ProviderOptions::default()
        };

        match tier {
            Tier::Development => {
                options.endpoint = env.get("R2_ENDPOINT");
                options.cloudflare_public_access_url = env.get("R2_PUBLIC_URL");
            }
            Tier::Production => {
                options.region = env.get("R2_REGION");
                options.params.account_id = env.get("R2_ACCOUNT_ID");
                options.params.public_url = env.get("R2_PUBLIC_URL");
            }
        }

        Self {
            provider: PROVIDER.to_string(),
            provider_options: options,
            action_options: ActionOptions::default(),
        }
    }

    /// Check the URL-shaped fields the provider would reject at startup
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("R2_ENDPOINT", &self.provider_options.endpoint),
            (
                "R2_PUBLIC_URL",
                &self.provider_options.cloudflare_public_access_url,
            ),
            ("R2_PUBLIC_URL", &self.provider_options.params.public_url),
        ] {
            if let Some(raw) = value
                && let Err(e) = url::Url::parse(raw)
            {
                return Err(Error::validation_with_value(
                    field,
                    &format!("not a valid URL: {}", e),
                    raw,
                ));
            }
        }

        Ok(())
    }

    /// Credential variables that were unset during resolution
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.provider_options.access_key_id.is_none() {
            missing.push("R2_ACCESS_KEY_ID");
        }
        if self.provider_options.secret_access_key.is_none() {
            missing.push("R2_ACCESS_SECRET");
        }
        if self.provider_options.params.bucket.is_none() {
            missing.push("R2_BUCKET");
        }
        missing
    }
}
