//! File-existence checks for candidate test-result files.
//!
//! This is the only file-system access the configuration core performs.  A
//! failed lookup (permission denied, broken symlink, ...) is reported as
//! "does not exist"; there is no error channel.
//!
//! # Testability
//!
//! The `FileSystem` trait lets tests declare which paths exist without
//! touching the disk; see [`mock::MockFileSystem`].

use std::path::Path;

pub mod mock;

/// Narrow view of the file system used by the configuration store.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` names an existing file.
    fn exists(&self, path: &Path) -> bool;

    /// Absolute, human-readable form of `path` for diagnostics.
    fn full_name(&self, path: &Path) -> String;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn full_name(&self, path: &Path) -> String {
        if path.is_absolute() {
            return path.display().to_string();
        }
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path).display().to_string(),
            Err(_) => path.display().to_string(),
        }
    }
}
