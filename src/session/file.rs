//! File-backed session store. The file is a flat JSON object, mirroring a
//! browser key/value storage area; the token lives under [`TOKEN_KEY`] and any
//! other keys found in the file are preserved on write.

use super::{SessionError, SessionStore, TOKEN_KEY};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// File name of the storage area inside the session directory.
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store rooted at `dir`; the directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_area(&self) -> Result<Map<String, Value>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SessionError::Corrupt(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
            Err(err) => Err(SessionError::Corrupt(format!(
                "{}: {err}",
                self.path.display()
            ))),
        }
    }

    fn write_area(&self, area: &Map<String, Value>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_vec_pretty(area)
            .map_err(|err| SessionError::Corrupt(format!("failed to encode session: {err}")))?;

        // Readers must never observe a partially written file.
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = open_private(&tmp)?;
            file.write_all(&payload)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!("session file written: {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SecretString>, SessionError> {
        let area = self.read_area()?;
        match area.get(TOKEN_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(token)) => Ok(Some(SecretString::from(token.clone()))),
            Some(_) => Err(SessionError::Corrupt(format!(
                "`{TOKEN_KEY}` in {} is not a string",
                self.path.display()
            ))),
        }
    }

    fn save(&self, token: &SecretString) -> Result<(), SessionError> {
        // A corrupt file is replaced rather than blocking a fresh login.
        let mut area = self.read_area().unwrap_or_default();
        area.insert(
            TOKEN_KEY.to_string(),
            Value::String(token.expose_secret().to_string()),
        );
        self.write_area(&area)
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut area = match self.read_area() {
            Ok(area) => area,
            Err(SessionError::Corrupt(_)) => Map::new(),
            Err(err) => return Err(err),
        };

        if area.remove(TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_area(&area)
    }
}
