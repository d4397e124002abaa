use clap::{Parser, Subcommand, ValueEnum};

/// Build and publish an Electron app with electron-builder from CI
#[derive(Parser, Debug)]
#[command(
    name = "electron-release",
    about = "Build and publish an Electron app with electron-builder from CI",
    version,
    long_about = "electron-release reads action inputs from INPUT_* environment variables, \
                  exports the credentials electron-builder expects, installs dependencies \
                  with npm or Yarn, and builds and publishes the app for the host platform."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// The requested command; a bare invocation runs the release.
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Run(RunArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(
        about = "Install dependencies, then build and publish (default)",
        long_about = "Validates the action inputs, installs dependencies and runs \
                      electron-builder with --publish always.\n\n\
                      Examples:\n  \
                      electron-release\n  \
                      electron-release run --dry-run"
    )]
    Run(RunArgs),

    #[command(
        about = "Show what would run without running it",
        long_about = "Validates the action inputs and prints the resolved release plan. \
                      Credential values are masked.\n\n\
                      Examples:\n  \
                      electron-release plan\n  \
                      electron-release plan --format json"
    )]
    Plan(PlanArgs),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct RunArgs {
    #[arg(long, help = "Log the commands instead of executing them")]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_runs() {
        let args = CliArgs::parse_from(["electron-release"]);
        assert!(matches!(
            args.resolved_command(),
            Commands::Run(RunArgs { dry_run: false })
        ));
    }

    #[test]
    fn test_run_dry_run() {
        let args = CliArgs::parse_from(["electron-release", "run", "--dry-run"]);
        assert!(matches!(
            args.resolved_command(),
            Commands::Run(RunArgs { dry_run: true })
        ));
    }

    #[test]
    fn test_plan_format() {
        let args = CliArgs::parse_from(["electron-release", "plan", "--format", "yaml"]);
        match args.resolved_command() {
            Commands::Plan(plan) => assert_eq!(plan.format, OutputFormatArg::Yaml),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_plan_defaults_to_human() {
        let args = CliArgs::parse_from(["electron-release", "plan"]);
        match args.resolved_command() {
            Commands::Plan(plan) => assert_eq!(plan.format, OutputFormatArg::Human),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["electron-release", "plan", "--log-level", "debug"]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["electron-release", "-q", "-v"]);
        assert!(result.is_err());
    }
}
