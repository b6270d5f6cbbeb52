//! Session context
//!
//! The bearer token and the user-info blob are persisted under two fixed
//! keys in a small key-value file, the way a browser keeps them in local
//! storage. [`SessionContext`] is the single source of truth for "is the
//! user authenticated" and is handed explicitly to whoever needs it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use shared::client::UserInfo;
use thiserror::Error;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "userToken";
/// Storage key of the user-info JSON blob
pub const USER_INFO_KEY: &str = "userInfo";
/// File name of the key-value store inside the data directory
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where an entry point should send the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Dashboard,
    Login,
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub token: String,
    pub user: UserInfo,
    /// JWT `exp` claim (Unix seconds), when the token carries one
    pub expires_at: Option<i64>,
}

impl UserSession {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        let token = token.into();
        let expires_at = parse_jwt_exp(&token);
        Self {
            token,
            user,
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| now_secs >= exp)
    }
}

/// Read the `exp` claim of a JWT without verifying it.
///
/// Opaque tokens yield `None` and are treated as non-expiring.
pub fn parse_jwt_exp(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_i64()
}

/// File-backed key-value store holding the persisted session
#[derive(Debug, Clone)]
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SessionError> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    /// Delete the backing file, dropping every key.
    pub fn reset(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.file_path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Explicit session context passed to page-level handlers
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: SessionStore,
    current: Option<UserSession>,
    ready: bool,
}

impl SessionContext {
    /// Create an unloaded context; call [`SessionContext::load`] before use.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: SessionStore::new(data_dir),
            current: None,
            ready: false,
        }
    }

    /// Create and load in one step.
    pub fn open(data_dir: &Path) -> Result<Self, SessionError> {
        let mut ctx = Self::new(data_dir);
        ctx.load()?;
        Ok(ctx)
    }

    /// Restore the persisted session. Synchronous; marks the context ready.
    ///
    /// Both keys must be present. A store file that is not a string map is
    /// reset; an unreadable user blob or an expired token clears the storage.
    pub fn load(&mut self) -> Result<Option<&UserSession>, SessionError> {
        self.current = None;
        let mut entries = match self.store.read_all() {
            Ok(entries) => entries,
            Err(SessionError::Json(e)) => {
                tracing::warn!(
                    path = %self.store.path().display(),
                    error = %e,
                    "Unreadable session store, resetting"
                );
                self.store.reset()?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        let token = entries.remove(TOKEN_KEY);
        let user_blob = entries.remove(USER_INFO_KEY);

        if let (Some(token), Some(blob)) = (token, user_blob) {
            match serde_json::from_str::<UserInfo>(&blob) {
                Ok(user) => {
                    let session = UserSession::new(token, user);
                    if session.is_expired_at(shared::util::now_secs()) {
                        tracing::info!(email = %session.user.email, "Persisted session expired, cleared");
                        self.wipe()?;
                    } else {
                        tracing::debug!(email = %session.user.email, "Loaded persisted session");
                        self.current = Some(session);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Unreadable user info, clearing session");
                    self.wipe()?;
                }
            }
        }

        self.ready = true;
        Ok(self.current.as_ref())
    }

    /// Persist a fresh session (after login).
    pub fn save(&mut self, token: &str, user: &UserInfo) -> Result<&UserSession, SessionError> {
        let blob = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_INFO_KEY, &blob)?;
        self.ready = true;
        tracing::debug!(email = %user.email, "Session saved");
        Ok(self.current.insert(UserSession::new(token, user.clone())))
    }

    /// Forget the session (logout or expired token).
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.current = None;
        self.wipe()?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    fn wipe(&self) -> Result<(), SessionError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_INFO_KEY)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// The session, or `Unauthorized` when nobody is logged in.
    pub fn require(&self) -> crate::ClientResult<&UserSession> {
        self.current
            .as_ref()
            .ok_or_else(|| crate::ClientError::Unauthorized("Login required".into()))
    }

    /// Dashboard when authenticated, login page otherwise.
    pub fn landing(&self) -> Landing {
        if self.is_authenticated() {
            Landing::Dashboard
        } else {
            Landing::Login
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
