//! Target project inspection

use crate::fs::FileSystem;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";
pub const NPM_LOCKFILE: &str = "package-lock.json";

/// What the action knows about the project directory. Computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    pub root: PathBuf,
    pub manifest_path: PathBuf,
    pub lockfile_path: PathBuf,
    pub has_manifest: bool,
    pub has_lockfile: bool,
}

impl ProjectDescriptor {
    pub fn inspect(root: &Path, fs: &dyn FileSystem) -> Self {
        let manifest_path = fs.join(root, MANIFEST_FILE);
        let lockfile_path = fs.join(root, NPM_LOCKFILE);

        Self {
            root: root.to_path_buf(),
            has_manifest: fs.exists(&manifest_path),
            has_lockfile: fs.exists(&lockfile_path),
            manifest_path,
            lockfile_path,
        }
    }
}
