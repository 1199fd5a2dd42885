//! CLI command implementations

pub mod heroes;
pub mod login;
pub mod transformations;

use anyhow::{Context, Result};
use dragonball_lib::{ClientConfig, NetworkClient, ReqwestTransport};

/// Client used by every command.
pub type Client = NetworkClient<ReqwestTransport>;

/// Resolve the configuration from the environment, letting `--base-url` win.
pub fn resolve_config(base_url: Option<String>) -> ClientConfig {
    let config = ClientConfig::from_env();
    match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

/// Build the HTTP client for this invocation.
pub fn build_client(base_url: Option<String>) -> Result<Client> {
    let config = resolve_config(base_url);
    tracing::debug!(base_url = %config.base_url, "building client");
    NetworkClient::from_config(config).context("Invalid client configuration")
}
