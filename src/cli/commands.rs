//! CLI command implementations
//!
//! Boot order for `serve`: config, logging, store, schema, HTTP.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;
use crate::repository::Store;
use crate::schema::hero_schema;

use super::args::{Command, ConfigArgs};
use super::errors::{CliError, CliResult};

/// Load configuration from file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    Ok(config)
}

/// Resolves the effective configuration: file (if any), then flags.
pub fn resolve_config(
    args: &ConfigArgs,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(database) = &args.database {
        config.store.database_path = database.clone();
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => {
            let config = resolve_config(&config, None, None)?;
            init(&config).await
        }
        Command::Serve { config, host, port } => {
            let config = resolve_config(&config, host, port)?;
            serve(config).await
        }
    }
}

/// Opens the store and creates the hero table.
async fn open_store(config: &HttpServerConfig) -> CliResult<Store> {
    let store = Store::open(&config.store).await?;
    store.ensure_schema(hero_schema()).await?;
    Ok(store)
}

/// Create the database file and tables, then exit
pub async fn init(config: &HttpServerConfig) -> CliResult<()> {
    let store = open_store(config).await?;
    store.close().await;
    println!(
        "Initialized hero store at {}",
        config.store.database_path.display()
    );
    Ok(())
}

/// Boot and serve until Ctrl-C
pub async fn serve(config: HttpServerConfig) -> CliResult<()> {
    init_logging(&config.log)?;

    let store = open_store(&config).await?;
    let server = HttpServer::new(config, store.clone());

    let result = server
        .start()
        .await
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

    store.close().await;
    result
}
