//! Output formatting for release plans
//!
//! Plans are printed as JSON, YAML or human-readable text. Credential values
//! are always masked.

use anyhow::{Context, Result};

use crate::action::ReleasePlan;
use crate::project::NPM_LOCKFILE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_plan(&self, plan: &ReleasePlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(plan)
                .context("Failed to serialize release plan to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(plan).context("Failed to serialize release plan to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(plan)),
        }
    }

    fn format_human(&self, plan: &ReleasePlan) -> String {
        let mut output = String::new();

        output.push_str("Release Plan\n");
        output.push_str(&"\u{2501}".repeat(42));
        output.push_str("\n\n");

        output.push_str(&format!("Platform:         {}\n", plan.platform));
        output.push_str(&format!("Provider:         {}\n", plan.provider));
        output.push_str(&format!(
            "Package root:     {}\n",
            plan.project.root.display()
        ));
        let reason = if plan.project.has_lockfile {
            format!("{} found", NPM_LOCKFILE)
        } else {
            format!("no {}", NPM_LOCKFILE)
        };
        output.push_str(&format!(
            "Package manager:  {} ({})\n\n",
            plan.package_manager, reason
        ));

        output.push_str("Commands:\n");
        output.push_str(&format!("\u{251C}\u{2500} Install: {}\n", plan.install.line));
        output.push_str(&format!("\u{2514}\u{2500} Build:   {}\n\n", plan.build.line));

        output.push_str("Environment:\n");
        let redacted = plan.env.redacted();
        let count = redacted.len();
        for (i, (name, value)) in redacted.iter().enumerate() {
            let connector = if i + 1 == count { "\u{2514}" } else { "\u{251C}" };
            output.push_str(&format!("{}\u{2500} {}={}\n", connector, name, value));
        }

        output
    }
}
