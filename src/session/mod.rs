//! Session context holding the opaque authentication token.
//!
//! The token is the only session state the client keeps. It is written on a
//! successful login, erased on logout and read on every guarded navigation.
//! Storage is pluggable through [`SessionStore`] so the guard and the API
//! client can be exercised without touching the filesystem. Token material
//! must never be logged.

mod file;
mod memory;

pub use self::file::FileSessionStore;
pub use self::memory::MemorySessionStore;

use secrecy::{ExposeSecret, SecretString};
use std::{fmt, io, sync::Arc};
use tracing::{debug, warn};

/// Fixed storage key the token is persisted under.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Corrupt(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(formatter, "Session storage error: {err}"),
            SessionError::Corrupt(message) => {
                write!(formatter, "Session storage is corrupt: {message}")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Corrupt(_) => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// Durable holder of the session token.
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Returns the persisted token, if any.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<SecretString>, SessionError>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &SecretString) -> Result<(), SessionError>;

    /// Erases the persisted token. Clearing an empty store is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> Result<(), SessionError>;
}

/// The two states of the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Anonymous => formatter.write_str("anonymous"),
            SessionState::Authenticated => formatter.write_str("authenticated"),
        }
    }
}

/// Injectable session handle shared by the route guard and the API client.
///
/// The state is never cached: every query reads the store, so a context
/// created at startup reflects whatever a previous run persisted.
#[derive(Clone, Debug)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Context backed by process memory only, starting anonymous.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    /// Returns the current token when a non-empty one is stored.
    ///
    /// A store that cannot be read is treated as holding no token.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        match self.store.load() {
            Ok(Some(token)) if !token.expose_secret().is_empty() => Some(token),
            Ok(_) => None,
            Err(err) => {
                warn!("Failed to read session token: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Stores the token returned by a successful login.
    /// A login while already authenticated overwrites the previous token.
    ///
    /// # Errors
    /// Returns an error if the token cannot be persisted.
    pub fn login(&self, token: SecretString) -> Result<SessionState, SessionError> {
        self.store.save(&token)?;
        debug!("session token stored");
        Ok(self.state())
    }

    /// Erases the token. Logging out while anonymous is a no-op.
    ///
    /// # Errors
    /// Returns an error if the token cannot be erased.
    pub fn logout(&self) -> Result<SessionState, SessionError> {
        self.store.clear()?;
        debug!("session token cleared");
        Ok(SessionState::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous() {
        let session = SessionContext::in_memory();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.token().is_none());
    }

    #[test]
    fn login_then_logout() -> Result<(), SessionError> {
        let session = SessionContext::in_memory();

        let state = session.login(SecretString::from("abc".to_string()))?;
        assert_eq!(state, SessionState::Authenticated);
        assert_eq!(
            session.token().map(|t| t.expose_secret().to_string()),
            Some("abc".to_string())
        );

        let state = session.logout()?;
        assert_eq!(state, SessionState::Anonymous);
        assert!(!session.is_authenticated());
        Ok(())
    }

    #[test]
    fn second_login_overwrites_token() -> Result<(), SessionError> {
        let session = SessionContext::in_memory();
        session.login(SecretString::from("first".to_string()))?;
        session.login(SecretString::from("second".to_string()))?;

        assert_eq!(
            session.token().map(|t| t.expose_secret().to_string()),
            Some("second".to_string())
        );
        Ok(())
    }

    #[test]
    fn empty_token_is_anonymous() -> Result<(), SessionError> {
        let session = SessionContext::in_memory();
        let state = session.login(SecretString::from(String::new()))?;
        assert_eq!(state, SessionState::Anonymous);
        Ok(())
    }

    #[test]
    fn clones_share_the_store() -> Result<(), SessionError> {
        let session = SessionContext::in_memory();
        let other = session.clone();
        session.login(SecretString::from("shared".to_string()))?;
        assert!(other.is_authenticated());
        other.logout()?;
        assert!(!session.is_authenticated());
        Ok(())
    }

    #[test]
    fn logout_while_anonymous_is_noop() -> Result<(), SessionError> {
        let session = SessionContext::in_memory();
        assert_eq!(session.logout()?, SessionState::Anonymous);
        Ok(())
    }
}
