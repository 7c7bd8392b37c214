use crate::{
    api::ApiClient,
    config::ClientConfig,
    session::{FileSessionStore, SessionContext},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Arguments shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_dir: Option<PathBuf>,
    pub timeout: u64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            session_dir: None,
            timeout: crate::config::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// # Errors
    /// Returns an error if the API URL is not a valid HTTP(S) URL.
    pub fn config(&self) -> Result<ClientConfig> {
        ClientConfig::new(&self.api_url, self.session_dir.as_deref(), self.timeout)
    }

    /// Session backed by the file under the configured session directory.
    #[must_use]
    pub fn session(config: &ClientConfig) -> SessionContext {
        SessionContext::new(FileSessionStore::new(&config.session_dir))
    }

    /// Builds the API client with its durable session.
    ///
    /// # Errors
    /// Returns an error if the config is invalid or the HTTP client cannot be built.
    pub fn client(&self) -> Result<ApiClient> {
        let config = self.config()?;
        let session = Self::session(&config);
        ApiClient::new(&config, session).context("Failed to initialize API client")
    }
}
