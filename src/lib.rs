//! electron-release - build and publish Electron apps from CI
//!
//! The action reads its inputs from `INPUT_*` environment variables, exports
//! the credentials electron-builder expects, installs the project's
//! dependencies with npm or Yarn, and runs
//! `electron-builder --<platform> --publish always`.
//!
//! # Example Usage
//!
//! ```no_run
//! use electron_release::{execute, Inputs, Platform, ProcessEnv, RealFileSystem, ShellRunner};
//!
//! let inputs = Inputs::new(&ProcessEnv);
//! match execute(Platform::current(), &inputs, &RealFileSystem, &ShellRunner) {
//!     Ok(_) => {}
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`platform`]: host platform detection
//! - [`inputs`]: `INPUT_*` lookup and validation
//! - [`projection`]: environment variables handed to electron-builder
//! - [`project`] and [`package_manager`]: npm vs Yarn selection
//! - [`runner`]: external command execution
//! - [`action`]: the release pipeline

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod inputs;
pub mod package_manager;
pub mod platform;
pub mod project;
pub mod projection;
pub mod runner;
pub mod util;

pub use action::{execute, run_action, PublishProvider, ReleasePlan};
pub use config::{ConfigError, ToolConfig};
pub use error::{ActionError, ValidationError};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use inputs::{InputName, InputSource, Inputs, MapSource, ProcessEnv};
pub use package_manager::PackageManager;
pub use platform::Platform;
pub use project::ProjectDescriptor;
pub use projection::EnvProjection;
pub use runner::{CommandRunner, DryRunRunner, ShellCommand, ShellRunner};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "electron-release");
    }
}
