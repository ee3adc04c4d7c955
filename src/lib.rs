//! CMS Plugin Configuration Resolver
//!
//! Environment-driven configuration for the plugins of a headless CMS
//! deployment: upload storage (Cloudflare R2), the GraphQL endpoint, and
//! the outgoing email transport (nodemailer/SMTP). The plugins themselves
//! are external collaborators selected by string identifier; this crate
//! only constructs the option mappings they are initialized with.
//!
//! # Features
//!
//! - **Snapshot-based resolution**: the environment is captured once at
//!   startup and every lookup is deterministic against that snapshot
//! - **Tiered profiles**: a development tier that opens the GraphQL
//!   surface and a production tier that locks it down
//! - **Deferred credential failure**: unset credentials resolve to absent
//!   fields and are rejected by the external plugin, never by the resolver
//! - **Layered settings**: CLI arguments over environment variables over a
//!   TOML settings file over built-in defaults
//!
//! # Architecture
//!
//! The binary offers two operation modes:
//! - **Resolve Mode**: prints the resolved plugin mapping as JSON
//! - **Check Mode**: validates what the external plugins would reject at
//!   their own startup
//!
//! # Usage
//!
//! ## Resolve Mode
//!
//! ```bash
//! cms-plugins --tier development --pretty
//! ```
//!
//! ## Check Mode
//!
//! ```bash
//! cms-plugins check
//! ```
//!
//! # Examples
//!
//! ```rust
//! use cms_plugins_config::{EnvSource, PluginsConfig, Settings};
//!
//! # fn example() -> cms_plugins_config::Result<()> {
//! let env = EnvSource::from_iter([("R2_BUCKET", "media")]);
//! let plugins = PluginsConfig::resolve(&env, &Settings::default())?;
//! assert_eq!(plugins.email.config.provider_options.port, 587);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod plugins;
pub mod utils;

pub use config::{ConfigLoader, EnvSource, Settings, Tier};
pub use error::{Error, Result};
pub use plugins::{EmailConfig, GraphqlConfig, PluginsConfig, UploadConfig};
