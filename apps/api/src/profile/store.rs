//! Profile persistence: a single record under a fixed key in a local key-value file.
//!
//! The file is a JSON object. Only `PROFILE_KEY` is owned by this module; other keys
//! are carried through untouched on save. Saves are whole-record overwrites written
//! through a temp file and a rename so a crash never leaves a half-written file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::models::profile::Profile;

/// Key the profile record is stored under.
pub const PROFILE_KEY: &str = "user-profile";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store task failed: {0}")]
    Task(String),
}

/// Load/save of the single profile record.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<Profile>, StoreError>;

    /// Replaces the stored record.
    async fn save(&self, profile: &Profile) -> Result<(), StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// JSON file store
// ────────────────────────────────────────────────────────────────────────────

type Entries = BTreeMap<String, Value>;

pub struct JsonFileProfileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileStore for JsonFileProfileStore {
    async fn load(&self) -> Result<Option<Profile>, StoreError> {
        let path = self.path.clone();
        let entries = tokio::task::spawn_blocking(move || read_entries(&path))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;

        match entries.get(PROFILE_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    async fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let value = serde_json::to_value(profile)?;
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let mut entries = read_entries(&path)?;
            entries.insert(PROFILE_KEY.to_string(), value);
            write_entries(&path, &entries)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))??;

        info!("Profile saved to {}", self.path.display());
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<Entries, StoreError> {
    match std::fs::read(path) {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Entries::new()),
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No store file at {}", path.display());
            Ok(Entries::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn write_entries(path: &Path, entries: &Entries) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    serde_json::to_writer_pretty(&mut tmp, entries)?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store used when no store path is configured. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Option<Profile>>,
}

impl InMemoryProfileStore {
    #[cfg(test)]
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self) -> Result<Option<Profile>, StoreError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}
