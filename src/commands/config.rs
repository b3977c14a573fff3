//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Print a single configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_json;
use crate::config::{BASE_URL_ENV, Config};
use crate::error::{PostviewError, Result};

const VALID_KEYS: &[&str] = &["base_url", "request_timeout"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    BaseUrl,
    RequestTimeout,
}

/// Reject unknown keys, suggesting underscore notation for dotted ones
fn validate_config_key(key: &str) -> Result<ConfigKey> {
    match key {
        "base_url" => return Ok(ConfigKey::BaseUrl),
        "request_timeout" => return Ok(ConfigKey::RequestTimeout),
        _ => {}
    }

    let underscored = key.replace(['.', '-'], "_");
    if VALID_KEYS.contains(&underscored.as_str()) {
        return Err(PostviewError::Config(format!(
            "invalid config key '{key}'. Use '{underscored}'"
        )));
    }

    Err(PostviewError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.base_url()?;
    let env_override = std::env::var(BASE_URL_ENV).is_ok_and(|v| !v.is_empty());

    if output_json {
        return print_json(&json!({
            "base_url": base_url.as_str(),
            "base_url_from_env": env_override,
            "request_timeout": config.request_timeout,
            "config_file": Config::config_path().to_string_lossy(),
        }));
    }

    println!("{}\n", "Configuration:".cyan().bold());
    let source = if env_override {
        format!(" (from {BASE_URL_ENV})")
    } else if config.base_url.is_none() {
        " (default)".to_string()
    } else {
        String::new()
    };
    println!("{}: {}{}", "base_url".cyan(), base_url, source.dimmed());
    println!(
        "{}: {}s",
        "request_timeout".cyan(),
        config.request_timeout
    );
    println!(
        "\n{}: {}",
        "config_file".dimmed(),
        Config::config_path().display()
    );
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match validate_config_key(key)? {
        ConfigKey::BaseUrl => config.set_base_url(value)?,
        ConfigKey::RequestTimeout => {
            let seconds: u64 = value.parse().map_err(|_| {
                PostviewError::Config(format!(
                    "request_timeout must be a whole number of seconds, got '{value}'"
                ))
            })?;
            config.set_request_timeout(seconds)?;
        }
    }

    config.save()?;
    println!("Set {key} = {value}");
    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let key = validate_config_key(key)?;
    let config = Config::load()?;

    match key {
        ConfigKey::BaseUrl => println!("{}", config.base_url()?),
        ConfigKey::RequestTimeout => println!("{}", config.request_timeout),
    }
    Ok(())
}
