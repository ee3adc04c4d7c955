//! Configuration example
//!
//! This example demonstrates various ways to drive the plugin configuration
//! resolver: defaults, environment snapshots, and resolver settings files.

use cms_plugins_config::{EnvSource, PluginsConfig, Settings, Tier, config::ConfigLoader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt().init();

    println!("CMS Plugin Configuration - Resolver Examples");
    println!("============================================");

    // Example 1: Default settings, empty environment
    println!("\n1. Default Configuration (production tier, empty environment):");
    let empty_env = EnvSource::default();
    let plugins = PluginsConfig::resolve(&empty_env, &Settings::default())?;
    println!(
        "   Email transport: {}:{}",
        plugins.email.config.provider_options.host, plugins.email.config.provider_options.port
    );
    println!(
        "   GraphQL landing page: {}",
        plugins.graphql.config.landing_page
    );
    println!("   Unset credentials: {:?}", plugins.missing_credentials());

    // Example 2: A synthetic environment snapshot
    println!("\n2. Environment Snapshot Configuration:");
    let env = EnvSource::from_iter([
        ("R2_ACCESS_KEY_ID", "AKIA123"),
        ("R2_ACCESS_SECRET", "s3cr3t"),
        ("R2_BUCKET", "media"),
        ("R2_ACCOUNT_ID", "abc123"),
        ("SMTP_HOST", "mail.internal"),
        ("SMTP_PORT", "2525"),
    ]);
    let plugins = PluginsConfig::resolve(&env, &Settings::default())?;
    println!(
        "   Upload bucket (from R2_BUCKET): {:?}",
        plugins.upload.config.provider_options.params.bucket
    );
    println!(
        "   Email transport (from SMTP_HOST/SMTP_PORT): {}:{}",
        plugins.email.config.provider_options.host, plugins.email.config.provider_options.port
    );

    // Example 3: Development tier opens the GraphQL surface
    println!("\n3. Development Tier:");
    let mut settings = Settings::default();
    settings.resolver.tier = Tier::Development;
    let plugins = PluginsConfig::resolve(&env, &settings)?;
    println!(
        "   shadowCRUD: {}, landingPage: {}",
        plugins.graphql.config.shadow_crud, plugins.graphql.config.landing_page
    );
    println!(
        "   Upload endpoint form: {:?}",
        plugins.upload.config.provider_options.endpoint
    );

    // Example 4: Resolver settings file
    println!("\n4. Settings File Example:");
    let settings_toml = r#"
[resolver]
tier = "development"

[email]
default_from = "news@example.org"
default_reply_to = "support@example.org"

[logging]
level = "debug"
"#;
    println!("   Example config.toml content:");
    println!("{}", settings_toml);

    let loader = ConfigLoader::new();
    println!("   Default tier: {}", loader.defaults().resolver.tier);

    // Example 5: The mapping handed to the framework
    println!("\n5. Serialized Plugin Mapping:");
    println!("{}", plugins.to_json_string_pretty()?);

    Ok(())
}
