//! File-backed implementation of the Persistence trait.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go to a sibling temp file
//! that is renamed over the target, so a crash mid-write leaves the previous
//! value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::traits::Persistence;

/// Directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    /// Open (and create if needed) a storage directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a key, distinguishing "missing" from "unreadable".
    pub fn load(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a key, replacing any previous value.
    pub fn save(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, serde_json::to_vec(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Persistence for FilePersistence {
    fn get(&self, key: &str) -> Option<Value> {
        self.load(key).unwrap_or_else(|e| {
            tracing::warn!(key, dir = %self.dir.display(), "failed to read key: {}", e);
            None
        })
    }

    fn set(&self, key: &str, value: &Value) -> bool {
        match self.save(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, dir = %self.dir.display(), "failed to write key: {}", e);
                false
            }
        }
    }
}
