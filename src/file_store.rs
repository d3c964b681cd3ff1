//! File-backed key-value store.
//!
//! This module provides the default persistence backend: one file per key
//! under the platform's standard data directory. Key names are sanitized
//! before use in file paths.

use crate::selection_store::{KeyValueStore, SelectionStoreError};
use std::fs;
use std::path::PathBuf;

/// Key-value store writing each key to its own file.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crash mid-write never leaves a torn value behind.
pub struct FileKeyValueStore {
    /// The directory holding one file per key
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store in the platform's standard data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory location cannot be
    /// determined or the directory cannot be created.
    pub fn open() -> Result<Self, SelectionStoreError> {
        let proj_dirs = directories::ProjectDirs::from("", "", "casting_call").ok_or_else(
            || {
                SelectionStoreError::Backend(
                    "Failed to determine data directory location".to_string(),
                )
            },
        )?;

        Self::open_at(proj_dirs.data_dir().to_path_buf())
    }

    /// Opens the store in an explicit directory, creating it if needed.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let store = FileKeyValueStore::open_at(PathBuf::from("/tmp/selections"))?;
    /// ```
    pub fn open_at(dir: PathBuf) -> Result<Self, SelectionStoreError> {
        fs::create_dir_all(&dir).map_err(|e| {
            SelectionStoreError::Backend(format!(
                "Failed to create store directory {}: {e}",
                dir.display()
            ))
        })?;

        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SelectionStoreError> {
        let path = self.file_path(key);

        // A key that was never written has no file
        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(|e| {
            SelectionStoreError::Backend(format!("Failed to read {}: {e}", path.display()))
        })?;

        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SelectionStoreError> {
        let path = self.file_path(key);
        let tmp_path = path.with_extension("tmp");

        fs::write(&tmp_path, value).map_err(|e| {
            SelectionStoreError::Backend(format!(
                "Failed to write {}: {e}",
                tmp_path.display()
            ))
        })?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            SelectionStoreError::Backend(format!(
                "Failed to replace {}: {e}",
                path.display()
            ))
        })?;

        Ok(())
    }
}

/// Sanitizes a key for use in file paths.
///
/// Converts to lowercase and replaces all characters that are not
/// a-z, 0-9, or hyphen with underscores.
fn sanitize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
