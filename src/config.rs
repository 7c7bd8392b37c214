//! Client configuration: API endpoint, session directory and request timeout.
//! Values come from CLI arguments with environment fallbacks; none of them are
//! secret.

use anyhow::{Context, Result, anyhow};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Directory name used under `$HOME` when no session directory is configured.
pub const SESSION_DIR_NAME: &str = ".devconnect";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub session_dir: PathBuf,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a config, validating the API base URL.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or is not HTTP(S).
    pub fn new(api_url: &str, session_dir: Option<&Path>, timeout_secs: u64) -> Result<Self> {
        let api_base_url = parse_api_url(api_url)?;
        let session_dir = session_dir.map_or_else(default_session_dir, Path::to_path_buf);

        Ok(Self {
            api_base_url,
            session_dir,
            timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }
}

/// Parses and checks the API base URL.
///
/// # Errors
/// Returns an error if the URL is empty, malformed or uses another scheme.
pub fn parse_api_url(value: &str) -> Result<Url> {
    let value = normalize_value(value).ok_or_else(|| anyhow!("API URL must not be empty"))?;
    let url = Url::parse(&value).with_context(|| format!("Invalid API URL: {value}"))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(anyhow!("Unsupported API URL scheme: {scheme}")),
    }

    if url.host().is_none() {
        return Err(anyhow!("Invalid API URL: no host specified"));
    }

    Ok(url)
}

/// `$HOME/.devconnect`, or `.devconnect` relative to the working directory
/// when `HOME` is not set.
#[must_use]
pub fn default_session_dir() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map_or_else(
            || PathBuf::from(SESSION_DIR_NAME),
            |home| PathBuf::from(home).join(SESSION_DIR_NAME),
        )
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
