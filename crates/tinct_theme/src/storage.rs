//! Key-value storage backends for persisted store snapshots
//!
//! The store only needs the three operations browsers expose on local
//! storage. Two backends ship with the crate:
//! - [`MemoryStorage`]: process-local, lost on exit
//! - [`FileStorage`]: one `<key>.json` file per entry in a directory

use crate::ThemeError;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

/// Durable string key-value storage
pub trait Storage: Send + Sync {
    /// Read an entry; a missing entry is `Ok(None)`
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Create or overwrite an entry
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;

    /// Delete an entry; deleting a missing entry is not an error
    fn remove_item(&self, key: &str) -> Result<(), ThemeError>;
}

/// Check that `key` can name a file inside a storage directory.
///
/// Keys are non-empty, made of ASCII letters, digits, `-`, `_` and `.`, and
/// do not start with `.`.
pub fn validate_key(key: &str) -> Result<(), ThemeError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ThemeError::InvalidStorageKey(key.to_string()))
    }
}

/// In-memory storage
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

/// Directory-backed storage
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous entry intact.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ThemeError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::trace!("FileStorage: wrote {}", path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ThemeError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
