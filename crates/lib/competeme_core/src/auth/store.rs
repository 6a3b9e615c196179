//! Credential pair storage.
//!
//! Two string slots (access, refresh) in a persistent store. Writes are
//! last-write-wins and the slots are not updated atomically as a pair: a
//! crash between two `set` calls can leave tokens from different pairs.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use super::AuthError;

/// The two credential slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn file_name(self) -> &'static str {
        match self {
            TokenKind::Access => "access_token",
            TokenKind::Refresh => "refresh_token",
        }
    }
}

/// Storage for the credential pair. All operations are synchronous.
pub trait TokenStore: Send + Sync {
    /// Read a slot. `None` when absent or empty.
    fn get(&self, kind: TokenKind) -> Option<String>;

    /// Overwrite a slot.
    fn set(&self, kind: TokenKind, value: &str) -> Result<(), AuthError>;

    /// Delete a slot. Deleting an absent slot is a no-op.
    fn clear(&self, kind: TokenKind) -> Result<(), AuthError>;

    /// Delete both slots — logout clears the pair together.
    fn clear_all(&self) -> Result<(), AuthError> {
        self.clear(TokenKind::Access)?;
        self.clear(TokenKind::Refresh)
    }
}

/// File-backed store: one file per slot under a root directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    root: PathBuf,
}

impl FileTokenStore {
    /// Store rooted at `dirs::data_dir()/competeme`.
    pub fn new() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("competeme");
        Self { root }
    }

    /// Store rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, kind: TokenKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        let contents = fs::read_to_string(self.slot_path(kind)).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn set(&self, kind: TokenKind, value: &str) -> Result<(), AuthError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.slot_path(kind), value)?;
        Ok(())
    }

    fn clear(&self, kind: TokenKind) -> Result<(), AuthError> {
        match fs::remove_file(self.slot_path(kind)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: Mutex<HashMap<TokenKind, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.slots.lock().ok()?.get(&kind).cloned()
    }

    fn set(&self, kind: TokenKind, value: &str) -> Result<(), AuthError> {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(kind, value.to_string());
        }
        Ok(())
    }

    fn clear(&self, kind: TokenKind) -> Result<(), AuthError> {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(&kind);
        }
        Ok(())
    }
}
