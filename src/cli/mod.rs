pub mod commands;
pub mod output;

pub use commands::{CliArgs, Commands, OutputFormatArg, PlanArgs, RunArgs};
pub use output::{OutputFormat, OutputFormatter};
