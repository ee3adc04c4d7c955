//! Check mode CLI logic
//!
//! Resolves the plugin configuration and then runs the validation the
//! external plugins would otherwise perform at their own startup, so a
//! broken deployment surfaces before the framework boots.

use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{ConfigLoader, EnvSource},
    error::format_error,
    plugins::PluginsConfig,
    utils::version,
};

/// Arguments for check mode
#[derive(Debug)]
pub struct CheckArgs {
    pub tier: Option<String>,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Run check mode with the given arguments
pub fn run_check_mode(args: CheckArgs) -> Result<()> {
    // Logging precedence: --verbose flag > RUST_LOG > default info
    let env_filter = if args.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("cms-plugins v{} checking plugin configuration", version::get_version());

    let config_loader = ConfigLoader::new();
    let config_path = super::settings_path(args.config.as_deref());

    // Unlike resolve mode, a broken settings file fails the check outright
    let mut settings = config_loader.load(config_path.as_deref())?;

    if let Some(tier) = args.tier.as_deref() {
        settings.resolver.tier = tier.parse()?;
    }

    let env = EnvSource::from_process();
    let plugins = PluginsConfig::resolve(&env, &settings)?;

    for var in plugins.missing_credentials() {
        warn!(
            "{} is unset; the corresponding plugin will reject the configuration at startup",
            var
        );
    }

    if let Err(e) = plugins.validate() {
        error!("{}", format_error(&e));
        anyhow::bail!("plugin configuration for tier '{}' is invalid", settings.resolver.tier);
    }

    info!(
        "plugin configuration for tier '{}' is valid",
        settings.resolver.tier
    );

    Ok(())
}
