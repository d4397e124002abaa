use electron_release::cli::commands::{CliArgs, Commands, PlanArgs, RunArgs};
use electron_release::cli::output::OutputFormatter;
use electron_release::config::validate_log_level;
use electron_release::util::logging::{init_logging, parse_level, LoggingConfig};
use electron_release::{
    execute, ActionError, CommandRunner, DryRunRunner, Inputs, Platform, ProcessEnv,
    RealFileSystem, ReleasePlan, ShellRunner, ToolConfig, NAME, VERSION,
};

use clap::Parser;
use std::process;
use tracing::{debug, error, info, warn, Level};

fn main() {
    let args = CliArgs::parse();
    let tool_config = ToolConfig::from_env();
    init_logging_from_args(&args, &tool_config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);
    debug!("{}", tool_config);
    if let Err(e) = tool_config.validate() {
        warn!("{}", e);
    }
    if let Some(level) = &args.log_level {
        if let Err(e) = validate_log_level(level) {
            warn!("{}", e);
        }
    }

    let exit_code = match args.resolved_command() {
        Commands::Run(run_args) => handle_run(&run_args),
        Commands::Plan(plan_args) => handle_plan(&plan_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, tool_config: &ToolConfig) {
    let mut config = LoggingConfig::from_tool_config(tool_config);
    config.level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        config.level
    };
    init_logging(config);
}

fn handle_run(args: &RunArgs) -> i32 {
    let platform = Platform::current();
    debug!("Detected platform: {}", platform);

    let runner: Box<dyn CommandRunner> = if args.dry_run {
        info!("Dry run: commands will be logged, not executed");
        Box::new(DryRunRunner)
    } else {
        Box::new(ShellRunner::new())
    };

    let inputs = Inputs::new(&ProcessEnv);
    match execute(platform, &inputs, &RealFileSystem::new(), runner.as_ref()) {
        Ok(plan) => {
            info!("Released for {} via {}", plan.platform, plan.provider);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn handle_plan(args: &PlanArgs) -> i32 {
    let inputs = Inputs::new(&ProcessEnv);
    let plan = match ReleasePlan::resolve(Platform::current(), &inputs, &RealFileSystem::new()) {
        Ok(plan) => plan,
        Err(e) => return report_failure(&ActionError::from(e)),
    };

    match OutputFormatter::new(args.format.into()).format_plan(&plan) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("{:#}", e);
            1
        }
    }
}

fn report_failure(err: &ActionError) -> i32 {
    error!("{}", err);
    eprintln!("{}", err);
    err.exit_code()
}
