//! Atomic TOML file operations.
//!
//! Provides a thin layer for safe access to TOML records on disk. Writes
//! go to a temporary file, are fsynced, and are renamed into place, so a
//! reader never observes a partially written record and a crash mid-write
//! never loses the previous version.

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during atomic TOML operations.
#[derive(Debug, Error)]
pub enum AtomicTomlError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// File locking error.
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<AtomicTomlError> for pathwise_core::CounselError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::Io(e) => pathwise_core::CounselError::io(e.to_string()),
            AtomicTomlError::Parse(e) => e.into(),
            AtomicTomlError::Serialize(e) => e.into(),
            AtomicTomlError::Lock(msg) => pathwise_core::CounselError::data_access(msg),
        }
    }
}

/// A handle to a TOML file with atomic, durable writes.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic TOML file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Loads the TOML file and deserializes it.
    ///
    /// Returns `None` when the file doesn't exist or is empty.
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the TOML file atomically.
    ///
    /// Takes an exclusive lock so concurrent writers to the same path
    /// serialize, then writes via temporary file + fsync + rename.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let toml_string = toml::to_string_pretty(data)?;

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;

        // Ensure data hits the disk before the rename
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Gets the temporary file path for atomic writes.
    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicTomlError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicTomlError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock on the given path.
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicTomlError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRecord {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.toml");
        let atomic_file = AtomicTomlFile::<TestRecord>::new(file_path);

        let record = TestRecord {
            name: "test".to_string(),
            count: 42,
        };

        atomic_file.save(&record).unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.toml");
        let atomic_file = AtomicTomlFile::<TestRecord>::new(file_path);

        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_overwrite_replaces_record() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.toml");
        let atomic_file = AtomicTomlFile::<TestRecord>::new(file_path);

        atomic_file
            .save(&TestRecord {
                name: "first".to_string(),
                count: 1,
            })
            .unwrap();
        atomic_file
            .save(&TestRecord {
                name: "second".to_string(),
                count: 2,
            })
            .unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded.name, "second");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.toml");
        let atomic_file = AtomicTomlFile::<TestRecord>::new(file_path.clone());

        atomic_file
            .save(&TestRecord {
                name: "test".to_string(),
                count: 42,
            })
            .unwrap();

        let tmp_path = temp_dir.path().join(".test.toml.tmp");
        assert!(!tmp_path.exists());
        assert!(file_path.exists());
    }
}
