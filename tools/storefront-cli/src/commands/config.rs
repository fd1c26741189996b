//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[catalog]");
    ctx.output.kv("url", &config.catalog.url);

    ctx.output.info("[geocoding]");
    ctx.output.kv("url", &config.geocoding.url);
    ctx.output.kv("zoom", &config.geocoding.zoom.to_string());
    ctx.output.kv("user_agent", &config.geocoding.user_agent);

    ctx.output.info("[location]");
    ctx.output.kv("fallback", &config.location.fallback().to_string());
    match config.location.device() {
        Some(device) => ctx.output.kv("device", &device.to_string()),
        None => ctx.output.kv("device", "(unavailable)"),
    }

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    if ctx.config_path.is_none() {
        ctx.output.warn("Warning: no config file found, checking defaults");
    }

    let errors = ctx.config.validate();
    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    bail!("Configuration has {} error(s)", errors.len())
}

fn get_config_value(config: &StorefrontConfig, key: &str) -> Result<serde_json::Value> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["catalog", "url"] => config.catalog.url.clone().into(),
        ["geocoding", "url"] => config.geocoding.url.clone().into(),
        ["geocoding", "zoom"] => config.geocoding.zoom.into(),
        ["geocoding", "user_agent"] => config.geocoding.user_agent.clone().into(),
        ["location", "fallback_latitude"] => config.location.fallback_latitude.into(),
        ["location", "fallback_longitude"] => config.location.fallback_longitude.into(),
        ["location", "device_latitude"] => config.location.device_latitude.into(),
        ["location", "device_longitude"] => config.location.device_longitude.into(),
        ["logging", "level"] => config.logging.level.clone().into(),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let mut config = StorefrontConfig::default();
        config.location.device_latitude = Some(1.25);

        assert_eq!(
            get_config_value(&config, "catalog.url").unwrap(),
            "https://fakestoreapi.com/products"
        );
        assert_eq!(get_config_value(&config, "geocoding.zoom").unwrap(), 18);
        assert_eq!(
            get_config_value(&config, "location.device_latitude").unwrap(),
            1.25
        );
        assert!(get_config_value(&config, "location.device_longitude")
            .unwrap()
            .is_null());
        assert!(get_config_value(&config, "catalog.missing").is_err());
    }
}
