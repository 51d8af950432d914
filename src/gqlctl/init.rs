use crate::api::GatewayApi;
use crate::client::http::HttpClient;
use crate::config::GqlctlConfig;
use crate::error::{GqlctlError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the platform config directory when set.
pub const HOME_ENV: &str = "GQLCTL_HOME";

/// Finds where `config.json` lives: `$GQLCTL_HOME`, else the platform config dir.
pub fn resolve_config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("io", "gqlctl", "gqlctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GqlctlError::Config("could not determine a config directory".into()))
}

/// Loads the stored config and applies an `--endpoint` override on top.
pub fn load_config(config_dir: &Path, endpoint: Option<String>) -> Result<GqlctlConfig> {
    let config = GqlctlConfig::load(config_dir)?.with_endpoint_override(endpoint);
    debug!(
        config_dir = %config_dir.display(),
        endpoint = %config.endpoint,
        "configuration loaded"
    );
    Ok(config)
}

/// Builds the production API. Fails with a connection error on a bad endpoint.
pub fn connect(config: &GqlctlConfig) -> Result<GatewayApi<HttpClient>> {
    let client = HttpClient::new(config)?;
    Ok(GatewayApi::new(client))
}
