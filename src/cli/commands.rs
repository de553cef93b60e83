//! CLI command implementations

use anyhow::Result;
use std::fs;

use crate::api;
use crate::cli::{confirm, info, success, warn};
use crate::config;
use crate::store::{seed, Store};

/// Initialize a new daybook.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("daybook.toml");

    if config_path.exists() {
        warn("daybook.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created daybook.toml");
    info("Edit the configuration file and run 'daybook serve' to start the server");

    Ok(())
}

/// Start the HTTP API server
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = config::load_config()?;

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    api::run_server(config, &host, port).await?;

    Ok(())
}

/// Reset the database and fill it with sample data
pub async fn seed(force: bool) -> Result<()> {
    let config = config::load_config()?;

    if !force
        && !confirm("This will drop all existing data and reseed the database. Continue?")
    {
        info("Seed cancelled");
        return Ok(());
    }

    let mut store = Store::connect(&config.database.url).await?;
    seed::seed_database(&mut store).await?;

    success("Database seeded");
    info(&format!(
        "All seeded accounts use the password '{}'",
        seed::SEED_PASSWORD
    ));

    Ok(())
}
