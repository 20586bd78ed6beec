use colored::Color;
use common::logger::Logger;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Flat string key-value persistence, the local-storage analog. The address
/// book serializes its whole list as one value under one well-known key.
/// Implementations are injected into the services that need them; there is
/// no ambient global store.
pub trait KeyValueStore: Send {
    fn read(&self, key: &str) -> Option<String>;
    /// Write failures are the implementation's problem to log; callers treat
    /// writes as fire-and-forget, like `localStorage.setItem`.
    fn write(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// One file per key under a data directory. IO errors degrade: reads come
/// back empty, writes are logged and dropped.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    logger: Logger,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore {
            dir: dir.into(),
            logger: Logger::new("File Store", Color::Magenta),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            self.logger
                .error(format!("Could not create {}: {}", self.dir.display(), err));
            return;
        }
        if let Err(err) = fs::write(self.path_for(key), value) {
            self.logger
                .error(format!("Could not persist '{}': {}", key, err));
        }
    }

    fn delete(&mut self, key: &str) {
        // Missing file is fine; the key was already absent.
        let _ = fs::remove_file(self.path_for(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("k"), None);
        store.write("k", "v");
        assert_eq!(store.read("k"), Some("v".to_string()));
        store.delete("k");
        assert_eq!(store.read("k"), None);
    }

    #[test]
    fn file_store_round_trips() {
        let dir = std::env::temp_dir().join(format!("comparer-store-{}", rand::random::<u64>()));
        let mut store = FileStore::new(&dir);

        assert_eq!(store.read("blob"), None);
        store.write("blob", "[1,2,3]");
        assert_eq!(store.read("blob"), Some("[1,2,3]".to_string()));
        store.delete("blob");
        assert_eq!(store.read("blob"), None);

        let _ = fs::remove_dir_all(dir);
    }
}
