//! GraphQL plugin configuration
//!
//! Static per-tier literals; nothing here reads the environment. The
//! development tier exposes shadow CRUD and the landing page, production
//! keeps both off. Query limits and tracing are identical in both tiers.

use crate::config::Tier;
use serde::Serialize;

/// Path the GraphQL server mounts under
pub const ENDPOINT: &str = "/graphql";

/// Maximum query depth accepted by the server
pub const DEPTH_LIMIT: u32 = 8;

/// Maximum number of results per query
pub const AMOUNT_LIMIT: u32 = 100;

/// GraphQL plugin configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlConfig {
    /// Mount path
    pub endpoint: String,
    /// Auto-generate CRUD operations from content-type schemas
    #[serde(rename = "shadowCRUD")]
    pub shadow_crud: bool,
    /// Serve the interactive landing page (playground)
    pub landing_page: bool,
    /// Query depth limit
    pub depth_limit: u32,
    /// Result amount limit
    pub amount_limit: u32,
    /// Apollo server passthrough options
    pub apollo_server: ApolloServerOptions,
}

/// Options forwarded verbatim to the Apollo server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApolloServerOptions {
    /// Request tracing
    pub tracing: bool,
}

impl GraphqlConfig {
    /// Build the configuration for a tier
    pub fn for_tier(tier: Tier) -> Self {
        let development = tier.is_development();

        Self {
            endpoint: ENDPOINT.to_string(),
            shadow_crud: development,
            landing_page: development,
            depth_limit: DEPTH_LIMIT,
            amount_limit: AMOUNT_LIMIT,
            apollo_server: ApolloServerOptions { tracing: false },
        }
    }
}
