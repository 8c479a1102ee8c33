//! The `buildparam check` command.
//!
//! Resolves the build inputs and reports problems without printing the
//! parameters. Useful as a CI gate before a release build.

use crate::cli::args::CheckArgs;
use crate::error::{BuildParamError, Result};
use crate::resolver::resolve_with_report;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sources = self.context.load_sources()?;
        let resolution = resolve_with_report(&sources)?;
        let config = &resolution.config;

        if self.args.require_flutter_sdk && config.flutter_sdk().is_none() {
            return Err(BuildParamError::FlutterSdkNotFound {
                path: sources.layout.local_properties_path(),
            });
        }

        for warning in &resolution.warnings {
            ui.warning(&warning.to_string());
        }

        if self.args.strict && !resolution.warnings.is_empty() {
            let count = resolution.warnings.len();
            ui.error(&format!(
                "{} warning{} with --strict",
                count,
                if count == 1 { "" } else { "s" }
            ));
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!(
            "{} {} ({}) resolves, {} release build",
            config.package_name(),
            config.version_name(),
            config.version_code(),
            if config.signing().is_some() {
                "signed"
            } else {
                "unsigned"
            }
        ));

        Ok(CommandResult::success())
    }
}
