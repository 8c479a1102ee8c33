//! The `buildparam resolve` command.
//!
//! Resolves the build parameters and prints them in the requested format.

use std::fs;

use tracing::debug;

use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::render::render;
use crate::resolver::resolve_with_report;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    context: CommandContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(context: CommandContext, args: ResolveArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let sources = self.context.load_sources()?;
        let resolution = resolve_with_report(&sources)?;

        for warning in &resolution.warnings {
            ui.warning(&warning.to_string());
        }

        let output = render(&resolution.config, self.args.format)?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, &output)?;
                debug!("Wrote {} bytes to {}", output.len(), path.display());
                ui.success(&format!(
                    "Wrote {} parameters to {}",
                    self.args.format,
                    path.display()
                ));
            }
            None => ui.emit(&output),
        }

        Ok(CommandResult::success())
    }
}
