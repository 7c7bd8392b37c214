//! Auth endpoints. Login stores the returned token in the client's session;
//! registration only acknowledges. Passwords and tokens must never be logged.

use super::{ApiClient, ApiError};
use crate::{
    forms::{LoginForm, RegisterForm},
    session::SessionState,
};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

impl ApiClient {
    /// Registers a new account. Success carries no data the client uses.
    ///
    /// # Errors
    /// Returns `ApiError::Rejected` with the server message on a refused
    /// registration, or a transport error.
    #[instrument(skip_all)]
    pub async fn register(&self, form: &RegisterForm) -> Result<(), ApiError> {
        let body = json!({
            "name": form.name,
            "email": form.email,
            "password": form.password.expose_secret(),
        });

        self.send_json(Method::POST, "/auth/register", &body).await?;
        info!("registration accepted");
        Ok(())
    }

    /// Logs in and persists the returned token, moving the session to
    /// `Authenticated`. An existing token is overwritten.
    ///
    /// # Errors
    /// Returns `ApiError::Rejected` with the server message on bad
    /// credentials, `ApiError::Parse` when the response has no token, or
    /// `ApiError::Session` when the token cannot be stored.
    #[instrument(skip_all)]
    pub async fn login(&self, form: &LoginForm) -> Result<SessionState, ApiError> {
        let body = json!({
            "email": form.email,
            "password": form.password.expose_secret(),
        });

        let response: LoginResponse = self
            .send_json_response(Method::POST, "/auth/login", &body)
            .await?;

        let token = response
            .token
            .ok_or_else(|| ApiError::Parse("Login response has no token".to_string()))?;

        let state = self.session().login(SecretString::from(token))?;
        info!("login succeeded");
        Ok(state)
    }

    /// Erases the stored token. The server is not contacted.
    ///
    /// # Errors
    /// Returns `ApiError::Session` when the token cannot be erased.
    pub fn logout(&self) -> Result<SessionState, ApiError> {
        Ok(self.session().logout()?)
    }
}
