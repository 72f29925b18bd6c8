//! File-based session storage.
//!
//! The session is one JSON document with two keys, `token` and `user`.

use std::io::ErrorKind;
use std::path::PathBuf;

use bookclub_kernel::model::Session;
use bookclub_kernel::{SessionError, SessionStore};

/// Session store backed by a single JSON file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a concurrent `load` sees either the old or the new session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// The parent directory is created lazily on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "session".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SessionError::Write(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let content = serde_json::to_string_pretty(session)
            .map_err(|e| SessionError::Write(format!("failed to serialize session: {e}")))?;

        let temp = self.temp_path();
        std::fs::write(&temp, content)
            .map_err(|e| SessionError::Write(format!("failed to write {}: {e}", temp.display())))?;
        std::fs::rename(&temp, &self.path).map_err(|e| {
            SessionError::Write(format!("failed to replace {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn load(&self) -> Result<Session, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Session::default()),
            Err(e) => {
                return Err(SessionError::Read(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| SessionError::Read(format!("failed to parse {}: {e}", self.path.display())))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Clear(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
