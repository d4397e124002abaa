//! Host platform detection
//!
//! electron-builder takes one of `--mac`, `--windows` or `--linux`. Any host
//! that is not macOS or Windows builds the Linux targets.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
}

impl Platform {
    /// Maps an operating system identifier to a platform.
    ///
    /// Accepts both Rust's `std::env::consts::OS` values (`macos`, `windows`)
    /// and Node-style identifiers (`darwin`, `win32`).
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Platform::Mac,
            "windows" | "win32" => Platform::Windows,
            _ => Platform::Linux,
        }
    }

    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// The flag name electron-builder expects, without leading dashes.
    pub fn as_flag(&self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}
