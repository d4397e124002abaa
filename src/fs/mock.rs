use super::FileSystem;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// In-memory file tree. Relative paths are resolved against the mock root.
#[derive(Debug, Clone)]
pub struct MockFileSystem {
    entries: HashSet<PathBuf>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            entries: HashSet::new(),
            root,
        }
    }

    /// Adds a file along with every missing parent directory.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = self.normalize_path(path.as_ref());
        self.insert_with_parents(&path);
        self
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = self.normalize_path(path.as_ref());
        self.insert_with_parents(&path);
        self
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn insert_with_parents(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.entries.insert(current.clone());
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entries.contains(&self.normalize_path(path))
    }
}
