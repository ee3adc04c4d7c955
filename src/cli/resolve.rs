//! Resolve mode CLI logic
//!
//! Resolves the plugin configuration against the process environment and
//! prints the mapping as JSON on stdout, where the hosting framework's
//! deployment tooling picks it up.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Settings,
    config::{ConfigLoader, EnvSource},
    plugins::PluginsConfig,
};

/// Arguments for resolve mode
#[derive(Debug)]
pub struct ResolveArgs {
    pub tier: Option<String>,
    pub config: Option<String>,
    pub pretty: bool,
    pub verbose: bool,
}

/// Run resolve mode with the given arguments
pub fn run_resolve_mode(args: ResolveArgs) -> Result<()> {
    // Logging goes to stderr; stdout carries only the resolved mapping
    if args.verbose {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "error".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config_loader = ConfigLoader::new();
    let config_path = super::settings_path(args.config.as_deref());

    let mut settings = config_loader
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            eprintln!(
                "Warning: Failed to load resolver settings: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    // CLI tier override (highest priority)
    if let Some(tier) = args.tier.as_deref() {
        settings.resolver.tier = tier.parse()?;
    }

    debug!(
        "Resolving plugin configuration for tier '{}'",
        settings.resolver.tier
    );

    let env = EnvSource::from_process();
    let plugins = PluginsConfig::resolve(&env, &settings)?;

    let rendered = if args.pretty {
        plugins.to_json_string_pretty()?
    } else {
        plugins.to_json_string()?
    };
    println!("{}", rendered);

    Ok(())
}
