//! Release pipeline
//!
//! [`ReleasePlan::resolve`] validates every input up front and produces the
//! complete, immutable description of what will run. [`run_action`] executes
//! it: dependency install first, then build and publish. The first failure
//! stops the pipeline.

use crate::error::{ActionError, ValidationError};
use crate::fs::FileSystem;
use crate::inputs::{InputName, Inputs};
use crate::package_manager::PackageManager;
use crate::platform::Platform;
use crate::project::ProjectDescriptor;
use crate::projection::{self, EnvProjection};
use crate::runner::{CommandRunner, ShellCommand};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where electron-builder publishes the artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishProvider {
    /// GitHub releases
    Github,
    /// DigitalOcean Spaces
    Spaces,
}

impl PublishProvider {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "github" => Ok(PublishProvider::Github),
            "spaces" => Ok(PublishProvider::Spaces),
            other => Err(ValidationError::UnsupportedProvider {
                provider: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishProvider::Github => "github",
            PublishProvider::Spaces => "spaces",
        }
    }
}

impl fmt::Display for PublishProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReleasePlan {
    pub platform: Platform,
    pub provider: PublishProvider,
    pub project: ProjectDescriptor,
    pub package_manager: PackageManager,
    #[serde(serialize_with = "serialize_redacted")]
    pub env: EnvProjection,
    pub install: ShellCommand,
    pub build: ShellCommand,
}

fn serialize_redacted<S>(env: &EnvProjection, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    env.redacted().serialize(serializer)
}

impl ReleasePlan {
    pub fn resolve(
        platform: Platform,
        inputs: &Inputs<'_>,
        fs: &dyn FileSystem,
    ) -> Result<Self, ValidationError> {
        let package_root = PathBuf::from(inputs.require(InputName::PackageRoot)?);
        let provider_value = inputs.require(InputName::Provider)?;

        let project = ProjectDescriptor::inspect(&package_root, fs);
        let package_manager = PackageManager::select(&project);
        info!(
            "Will run {} commands in directory \"{}\"",
            package_manager,
            package_root.display()
        );

        if !project.has_manifest {
            return Err(ValidationError::ManifestNotFound {
                path: project.manifest_path.clone(),
            });
        }

        let provider = PublishProvider::parse(&provider_value)?;
        let mut env = EnvProjection::new();

        match provider {
            PublishProvider::Github => {
                env.set(
                    projection::GH_TOKEN,
                    inputs.get(InputName::GithubToken, true)?.as_deref(),
                );
            }
            PublishProvider::Spaces => {
                env.set(
                    projection::DO_KEY_ID,
                    inputs.get(InputName::DoKeyId, true)?.as_deref(),
                );
                env.set(
                    projection::DO_SECRET_KEY,
                    inputs.get(InputName::DoSercetKey, true)?.as_deref(),
                );
            }
        }

        match platform {
            Platform::Mac => {
                env.set(
                    projection::CSC_LINK,
                    inputs.get(InputName::MacCerts, true)?.as_deref(),
                );
                env.set(
                    projection::CSC_KEY_PASSWORD,
                    inputs.get(InputName::MacCertsPassword, true)?.as_deref(),
                );
                env.set(
                    projection::APPLEID,
                    inputs.get(InputName::AppleId, true)?.as_deref(),
                );
                env.set(
                    projection::APPLEIDPASS,
                    inputs.get(InputName::AppleIdPass, true)?.as_deref(),
                );
            }
            Platform::Windows => {
                env.set(
                    projection::WIN_CSC_LINK,
                    inputs.get(InputName::WindowsCerts, true)?.as_deref(),
                );
                env.set(
                    projection::WIN_CSC_KEY_PASSWORD,
                    inputs.get(InputName::WindowsCertsPassword, true)?.as_deref(),
                );
            }
            Platform::Linux => {}
        }

        // keeps postinstall banners out of CI logs
        env.set(projection::ADBLOCK, Some("true"));

        debug!(
            platform = %platform,
            provider = %provider,
            env = ?env.names().collect::<Vec<_>>(),
            "Resolved release plan"
        );

        let install = ShellCommand::new(
            package_manager.install_command(),
            &package_root,
            env.clone(),
        );
        let build = ShellCommand::new(
            package_manager.build_command(platform),
            &package_root,
            env.clone(),
        );

        Ok(Self {
            platform,
            provider,
            project,
            package_manager,
            env,
            install,
            build,
        })
    }
}

pub fn run_action(plan: &ReleasePlan, runner: &dyn CommandRunner) -> Result<(), ActionError> {
    info!("Installing dependencies using {}…", plan.package_manager);
    runner.run(&plan.install)?;

    info!("Building and releasing the Electron app…");
    runner.run(&plan.build)?;

    Ok(())
}

/// Resolves and runs the release in one go.
pub fn execute(
    platform: Platform,
    inputs: &Inputs<'_>,
    fs: &dyn FileSystem,
    runner: &dyn CommandRunner,
) -> Result<ReleasePlan, ActionError> {
    let plan = ReleasePlan::resolve(platform, inputs, fs)?;
    run_action(&plan, runner)?;
    Ok(plan)
}
