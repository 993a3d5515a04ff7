//! In-memory filesystem for uninstall tests.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;

/// Filesystem holding a set of existing paths.
///
/// Removing a path also removes every path below it.
#[derive(Default)]
pub struct MemoryFileSystem {
    paths: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// Creates a filesystem where exactly `paths` exist.
    #[must_use]
    pub fn with_paths<P: Into<PathBuf>>(paths: impl IntoIterator<Item = P>) -> Self {
        Self { paths: Mutex::new(paths.into_iter().map(Into::into).collect()) }
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.paths.lock().expect("fs lock poisoned").contains(path)
    }

    fn remove_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut paths = self.paths.lock().expect("fs lock poisoned");
        if !paths.contains(path) {
            return Err(format!("{} does not exist", path.display()).into());
        }
        paths.retain(|p| !p.starts_with(path));
        Ok(())
    }
}
