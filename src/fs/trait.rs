//! FileSystem trait definition

use std::path::{Path, PathBuf};

/// Abstraction over the existence checks the action performs.
///
/// Project files are never read; only their presence matters.
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Join paths
    fn join(&self, base: &Path, path: &str) -> PathBuf {
        base.join(path)
    }
}
