//! npm / Yarn command dialects
//!
//! A `package-lock.json` next to the manifest means the dependency tree was
//! produced by npm. Everything else is driven through Yarn.

use crate::platform::Platform;
use crate::project::ProjectDescriptor;
use serde::Serialize;
use std::fmt;

const BUILDER: &str = "electron-builder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn select(project: &ProjectDescriptor) -> Self {
        if project.has_lockfile {
            PackageManager::Npm
        } else {
            PackageManager::Yarn
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "NPM",
            PackageManager::Yarn => "Yarn",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Prefix that runs a locally installed package binary.
    pub fn exec_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npx --no-install",
            PackageManager::Yarn => "yarn run",
        }
    }

    pub fn build_command(&self, platform: Platform) -> String {
        format!(
            "{} {} --{} --publish always",
            self.exec_prefix(),
            BUILDER,
            platform.as_flag()
        )
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
