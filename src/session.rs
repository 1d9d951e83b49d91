//! # Session
//!
//! The signed-in user's profile and bearer token. Sign-in happens elsewhere; this crate
//! only reads what it left behind. The HTTP transport asks for the token on every
//! request, and the product client asks for the profile's role before planning a
//! status transition.

use crate::model::{Role, UserProfile};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;
use tracing::{info, warn};

/// Read access to the current session.
pub trait SessionStore: Send + Sync + 'static {
    fn user_profile(&self) -> Option<UserProfile>;

    fn access_token(&self) -> Option<String>;

    /// Role of the signed-in user.
    fn role(&self) -> Result<Role, SessionError> {
        let profile = self.user_profile().ok_or(SessionError::NotSignedIn)?;
        profile
            .role()
            .ok_or_else(|| SessionError::UnknownRole(profile.role_name.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("No user is signed in")]
    NotSignedIn,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Failed to read session file {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    #[serde(default)]
    user_profile: Option<UserProfile>,
    #[serde(default)]
    jwt_token: Option<String>,
}

/// Session kept in a JSON file: `{"userProfile": {...}, "jwtToken": "..."}`.
///
/// The file is read on [`FileSession::open`] and again on [`FileSession::reload`];
/// a reload that fails keeps the previous snapshot.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    snapshot: RwLock<SessionFile>,
}

impl FileSession {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = read_session(&path)?;
        info!(path = %path.display(), signed_in = snapshot.user_profile.is_some(), "Session loaded");
        Ok(Self {
            path,
            snapshot: RwLock::new(snapshot),
        })
    }

    pub fn reload(&self) -> Result<(), SessionError> {
        match read_session(&self.path) {
            Ok(snapshot) => {
                if let Ok(mut guard) = self.snapshot.write() {
                    *guard = snapshot;
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Keeping previous session");
                Err(e)
            }
        }
    }

    fn read<R>(&self, f: impl FnOnce(&SessionFile) -> R) -> Option<R> {
        self.snapshot.read().ok().map(|guard| f(&guard))
    }
}

impl SessionStore for FileSession {
    fn user_profile(&self) -> Option<UserProfile> {
        self.read(|s| s.user_profile.clone()).flatten()
    }

    fn access_token(&self) -> Option<String> {
        self.read(|s| s.jwt_token.clone())
            .flatten()
            .filter(|token| !token.is_empty())
    }
}

fn read_session(path: &Path) -> Result<SessionFile, SessionError> {
    let unreadable = |reason: String| SessionError::Unreadable {
        path: path.to_path_buf(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| unreadable(e.to_string()))
}

/// Fixed session, for tests and for running without a session file.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    profile: Option<UserProfile>,
    token: Option<String>,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(profile: UserProfile, token: impl Into<String>) -> Self {
        Self {
            profile: Some(profile),
            token: Some(token.into()),
        }
    }

    /// A signed-in session with just a role and an id.
    pub fn with_role(role: Role, token: impl Into<String>) -> Self {
        Self::signed_in(
            UserProfile {
                userprofile_id: 1,
                role_name: role.to_string(),
                first_name: None,
                last_name: None,
                email: None,
                role_id: None,
            },
            token,
        )
    }
}

impl SessionStore for StaticSession {
    fn user_profile(&self) -> Option<UserProfile> {
        self.profile.clone()
    }

    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_file_session_reads_profile_and_token() {
        let path = temp_file(
            "console-session",
            r#"{"userProfile": {"userprofile_id": 5, "role_name": "ADMIN"}, "jwtToken": "abc"}"#,
        );

        let session = FileSession::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(session.access_token().as_deref(), Some("abc"));
        assert_eq!(session.role(), Ok(Role::Admin));
    }

    #[test]
    fn test_reload_failure_keeps_snapshot() {
        let path = temp_file("console-session-reload", r#"{"jwtToken": "first"}"#);
        let session = FileSession::open(&path).unwrap();

        std::fs::write(&path, "{ not json").unwrap();
        assert!(session.reload().is_err());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(session.access_token().as_deref(), Some("first"));
        assert_eq!(session.role(), Err(SessionError::NotSignedIn));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = FileSession::open("/nonexistent/console-session.json");
        assert!(matches!(result, Err(SessionError::Unreadable { .. })));
    }

    #[test]
    fn test_unknown_role_is_reported() {
        let session = StaticSession::signed_in(
            UserProfile {
                userprofile_id: 2,
                role_name: "OFFICER".into(),
                first_name: None,
                last_name: None,
                email: None,
                role_id: None,
            },
            "t",
        );
        assert_eq!(session.role(), Err(SessionError::UnknownRole("OFFICER".into())));
        assert_eq!(StaticSession::anonymous().role(), Err(SessionError::NotSignedIn));
    }
}
