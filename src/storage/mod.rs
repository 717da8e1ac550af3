// src/storage/mod.rs
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No storage location available")]
    NoLocation,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store kept in a single JSON object file.
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "passgen.json";

    /// Open the store at `path`; a missing file is an empty store.
    ///
    /// A file that is not a JSON object of strings is moved aside to
    /// `<name>.corrupt` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let content = fs::read(&path)?;
            if content.iter().all(u8::is_ascii_whitespace) {
                BTreeMap::new()
            } else {
                match serde_json::from_slice(&content) {
                    Ok(values) => values,
                    Err(e) => {
                        log::warn!("Store {} is unreadable ({}), starting empty", path.display(), e);
                        Self::set_aside(&path);
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };

        log::debug!("Opened store {} ({} keys)", path.display(), values.len());

        Ok(Self { path, values })
    }

    /// Open the store in the platform config directory.
    pub fn open_default() -> Result<Self> {
        Self::open(default_store_path()?)
    }

    fn corrupt_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn set_aside(path: &Path) {
        let aside = Self::corrupt_path(path);
        match fs::rename(path, &aside) {
            Ok(()) => log::warn!("Moved unreadable store to {}", aside.display()),
            Err(e) => log::warn!("Could not move unreadable store aside: {}", e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Written to a sibling temp file and renamed over the target, so an
    // interrupted write leaves the previous contents in place
    fn flush(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Location of the store file inside the platform config directory,
/// created if missing.
pub fn default_store_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "passgen", "passgen")
        .ok_or(StorageError::NoLocation)?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(FileStore::FILE_NAME))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
