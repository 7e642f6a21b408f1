// Key/value storage for persisted records.
//
// The drill persists two string records, settings and history, through the
// narrow `Store` trait. What the strings contain is `persist.rs`'s concern;
// a store only moves text in and out.
//
// - `MemoryStore`: a map, for tests and embedding.
// - `FileStore`: one `<key>.json` file per record in a directory. The default
//   directory is the platform data dir (`directories::ProjectDirs`), e.g.
//   `~/.local/share/randnote` on Linux.

use crate::error::StoreError;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The records the drill persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    Settings,
    NoteHistory,
}

impl StoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Settings => "RandNote.Settings",
            StoreKey::NoteHistory => "RandNote.NoteHistory",
        }
    }
}

pub trait Store {
    /// `Ok(None)` when the record has never been written.
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    fn save(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<StoreKey, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a record, e.g. with a corrupt payload. Not counted as a
    /// write.
    pub fn with_record(mut self, key: StoreKey, value: impl Into<String>) -> Self {
        self.records.insert(key, value.into());
        self
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: StoreKey) -> Option<&str> {
        self.records.get(&key).map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(&key).cloned())
    }

    fn save(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.records.insert(key, value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store in the platform data directory.
    pub fn in_default_dir() -> Result<Self, StoreError> {
        Ok(Self::new(Self::default_dir()?))
    }

    pub fn default_dir() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("", "", "randnote")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StoreError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Store for FileStore {
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}
