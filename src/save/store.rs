//! Key-value storage backends.
//!
//! The save layer only ever reads and writes whole string values under
//! string keys, so the storage medium stays swappable: real saves live in
//! one JSON file per key under the platform config directory, tests use
//! an in-memory fake.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// Minimal storage contract used by the save manager.
pub trait KeyValueStore {
    /// Read the value for a key, `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write or overwrite a key.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    /// Remove a key; missing keys are fine.
    fn remove(&mut self, key: &str);
}

/// File-backed store: each key is `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store under the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "clicker").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine config directory",
            )
        })?;
        Self::at(project_dirs.config_dir().to_path_buf())
    }

    /// Store under an explicit directory, created if needed.
    pub fn at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }
}

/// In-memory store for tests. Clones share the same entries so a test
/// can keep a handle to storage it has handed to the game.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<std::cell::RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
