//! CLI command implementations.

mod config;
mod employees;
mod posts;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use employees::cmd_employees;
pub use posts::{cmd_posts, format_posts_text};

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::remote::{FixtureTransport, Gateway, HttpTransport};

/// Gateway over the fixture file when one is given, otherwise over HTTP
pub fn build_gateway(fixtures: Option<&Path>) -> Result<Gateway> {
    if let Some(path) = fixtures {
        tracing::debug!("Serving requests from {}", path.display());
        return Ok(Gateway::new(FixtureTransport::from_file(path)?));
    }

    let config = Config::load()?;
    Ok(Gateway::new(HttpTransport::from_config(&config)?))
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
