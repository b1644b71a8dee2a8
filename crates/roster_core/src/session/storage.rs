//! Durable storage for the single session slot.
//!
//! # Responsibility
//! - Load, save and remove one textual slot.
//! - Keep file-system details out of the session state machine.
//!
//! # Invariants
//! - Absence of the slot means signed-out.
//! - Removing an absent slot succeeds.
//! - File writes are replaced atomically via a temp file and rename.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slot name used when none is configured.
pub const DEFAULT_SESSION_SLOT: &str = "user";

pub type StorageResult<T> = Result<T, StorageError>;

/// Session slot read/write failures.
#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "session storage failed at `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize session identity: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// One named key-value slot in durable storage.
pub trait SessionStorage {
    /// Returns the slot contents, or `None` when the slot is absent.
    fn load(&self) -> StorageResult<Option<String>>;
    fn save(&mut self, value: &str) -> StorageResult<()>;
    fn remove(&mut self) -> StorageResult<()>;
}

/// Slot stored as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
    path: PathBuf,
}

impl FileSessionStorage {
    /// Uses [`DEFAULT_SESSION_SLOT`] inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_slot(dir, DEFAULT_SESSION_SLOT)
    }

    pub fn with_slot(dir: impl AsRef<Path>, slot: &str) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(format!("{slot}.json"));
        Self { dir, path }
    }

    /// Path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save(&mut self, value: &str) -> StorageResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(err))?;
        debug!(
            "event=session_slot_write module=session status=ok bytes={}",
            value.len()
        );
        Ok(())
    }

    fn remove(&mut self) -> StorageResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

/// In-process slot for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    slot: Option<String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose slot already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> StorageResult<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, value: &str) -> StorageResult<()> {
        self.slot = Some(value.to_string());
        Ok(())
    }

    fn remove(&mut self) -> StorageResult<()> {
        self.slot = None;
        Ok(())
    }
}
