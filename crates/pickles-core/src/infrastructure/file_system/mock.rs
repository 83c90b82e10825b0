//! In-memory file system for unit and integration tests.
//!
//! Paths "exist" only after they are registered with [`MockFileSystem::add_file`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::FileSystem;

/// A mock implementation of [`FileSystem`] with a fixed set of existing files.
#[derive(Clone)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashSet<PathBuf>>>,
    lookups: Arc<Mutex<u32>>,
}

impl MockFileSystem {
    /// Creates a file system in which nothing exists.
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashSet::new())),
            lookups: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates a file system in which exactly `paths` exist.
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let fs = Self::new();
        for path in paths {
            fs.add_file(path);
        }
        fs
    }

    /// Marks `path` as an existing file.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.files.lock().expect("lock poisoned").insert(path.into());
    }

    /// Returns the number of times [`FileSystem::exists`] was called.
    pub fn lookup_count(&self) -> u32 {
        *self.lookups.lock().expect("lock poisoned")
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        *self.lookups.lock().expect("lock poisoned") += 1;
        self.files.lock().expect("lock poisoned").contains(path)
    }

    fn full_name(&self, path: &Path) -> String {
        if path.is_absolute() {
            path.display().to_string()
        } else {
            format!("/mock/{}", path.display())
        }
    }
}
