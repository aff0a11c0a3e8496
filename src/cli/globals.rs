use crate::{
    api::{ApiClient, ClientConfig, SessionJar},
    features::auth::RolePolicy,
};
use anyhow::{Context, Result};
use std::{path::PathBuf, sync::Arc, time::Duration};

/// Backend settings shared by every subcommand that talks to the API.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub sanctum_url: String,
    pub session_file: PathBuf,
    pub session_cookie: String,
    pub cookie_settle_ms: u64,
    pub timeout_secs: u64,
    pub role_policy: RolePolicy,
}

impl GlobalArgs {
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url, &self.sanctum_url)
            .with_cookie_settle_delay(Duration::from_millis(self.cookie_settle_ms))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_session_cookie_name(&self.session_cookie)
    }

    /// Builds a client around the persisted session jar.
    ///
    /// # Errors
    /// Returns an error if the session file is unreadable or a URL is invalid.
    pub fn api_client(&self) -> Result<ApiClient> {
        let jar = SessionJar::load(&self.session_file).with_context(|| {
            format!("Failed to load session from {}", self.session_file.display())
        })?;
        ApiClient::with_jar(self.client_config(), Arc::new(jar))
            .context("Failed to build API client")
    }

    /// Writes the client's cookies back to the session file.
    ///
    /// # Errors
    /// Returns an error if the session file cannot be written.
    pub fn persist(&self, api: &ApiClient) -> Result<()> {
        api.persist(&self.session_file).with_context(|| {
            format!("Failed to save session to {}", self.session_file.display())
        })
    }
}
