//! Session token storage
//!
//! Holds the token issued on login or registration. The token is shared by
//! every page and optionally persisted to a file so it survives restarts.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::models::AuthToken;
use crate::utils::errors::{Result, SmartAdventuresError};
use crate::utils::logging::log_session_event;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<AuthToken>>>,
    file_path: Option<PathBuf>,
}

impl SessionStore {
    /// Session that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Session persisted at the configured file, loading any saved token
    pub async fn from_config(config: &SessionConfig) -> Result<Self> {
        match config.file_path.as_deref() {
            Some(path) => Self::persistent(path).await,
            None => Ok(Self::in_memory()),
        }
    }

    pub async fn persistent(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let token = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let contents = contents.trim();
                (!contents.is_empty()).then(|| AuthToken::new(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), restored = token.is_some(), "Session store opened");

        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            file_path: Some(path),
        })
    }

    pub fn token(&self) -> Option<AuthToken> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Current token, or `NotAuthenticated`
    pub fn require_token(&self) -> Result<AuthToken> {
        self.token().ok_or(SmartAdventuresError::NotAuthenticated)
    }

    /// Store a freshly issued token
    pub async fn set(&self, token: AuthToken) -> Result<()> {
        if let Some(path) = &self.file_path {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, token.as_str()).await?;
        }
        self.replace(Some(token));
        log_session_event("login", self.file_path.is_some());
        Ok(())
    }

    /// Forget the token (logout)
    pub async fn clear(&self) -> Result<()> {
        self.replace(None);
        if let Some(path) = &self.file_path {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to remove session file");
                    return Err(e.into());
                }
            }
        }
        log_session_event("logout", self.file_path.is_some());
        Ok(())
    }

    fn replace(&self, token: Option<AuthToken>) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = token;
    }
}
