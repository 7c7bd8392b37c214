//! In-memory session store; nothing survives the process.

use super::{SessionError, SessionStore};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Mutex;

/// Session store kept in process memory, used by tests and embedders that
/// manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<SecretString>>,
}

impl MemorySessionStore {
    /// Store pre-seeded with a token, as if a previous run had logged in.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(SecretString::from(token.to_string()))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<SecretString>>, SessionError> {
        self.token
            .lock()
            .map_err(|_| SessionError::Corrupt("session lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SecretString>, SessionError> {
        Ok(self
            .lock()?
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().to_string())))
    }

    fn save(&self, token: &SecretString) -> Result<(), SessionError> {
        *self.lock()? = Some(SecretString::from(token.expose_secret().to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock()? = None;
        Ok(())
    }
}
