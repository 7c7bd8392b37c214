//! HTTP client for the DevConnect REST API with a consistent timeout and error
//! handling. The client reads the session token from the injected
//! [`SessionContext`] on every request and attaches it as a bearer token when
//! one is present; it never logs the token.

pub mod auth;
pub mod errors;
pub mod projects;

pub use self::errors::ApiError;

use crate::{config::ClientConfig, session::SessionContext, APP_USER_AGENT};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    /// Builds a client for the configured API base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(config: &ClientConfig, session: SessionContext) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.as_str().to_string(),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Reads the token from the session store. Stores may do file I/O, so the
    /// read runs on the blocking pool.
    async fn current_token(&self) -> Result<Option<SecretString>, ApiError> {
        let session = self.session.clone();
        tokio::task::spawn_blocking(move || session.token())
            .await
            .map_err(|err| ApiError::Session(format!("Failed to read session: {err}")))
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = build_url_with_base(&self.base_url, path);
        debug!("{method} {url}");

        let builder = self.http.request(method, url);
        Ok(match self.current_token().await? {
            Some(token) => builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            ),
            None => builder,
        })
    }

    /// Fetches JSON from `path`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, path)
            .await?
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Sends a JSON body and parses a JSON response.
    pub(crate) async fn send_json_response<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = serde_json::to_vec(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = self
            .request(method, path)
            .await?
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Sends a JSON body; any response body is ignored on success.
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let payload = serde_json::to_vec(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = self
            .request(method, path)
            .await?
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }

    /// Sends a DELETE; any response body is ignored on success.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, path)
            .await?
            .send()
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `ApiError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Config(format!("Invalid request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status, body))
    }
}

/// Handles responses whose body is not used and returns HTTP errors when needed.
async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(error_from_body(status, body))
    }
}

fn error_from_body(status: StatusCode, body: String) -> ApiError {
    let status = status.as_u16();
    match server_message(&body) {
        Some(message) => ApiError::Rejected { status, message },
        None => ApiError::Http {
            status,
            message: sanitize_body(body),
        },
    }
}

/// Extracts the user-facing `msg` from an error body. Other keys are not
/// shown to the user.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("msg")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(|message| message.chars().take(MAX_ERROR_CHARS).collect())
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
