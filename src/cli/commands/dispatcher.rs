//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the inputs every command resolves from
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::config::Environment;
use crate::error::Result;
use crate::resolver::{BuildSources, DiscoverOptions};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Project location, discovery overrides and the environment snapshot.
#[derive(Debug, Clone)]
pub struct CommandContext {
    project_root: PathBuf,
    options: DiscoverOptions,
    environment: Environment,
}

impl CommandContext {
    /// Create a context for the given project root.
    pub fn new(project_root: PathBuf, options: DiscoverOptions, environment: Environment) -> Self {
        Self {
            project_root,
            options,
            environment,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the environment snapshot.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Read the settings and properties files for this project.
    pub fn load_sources(&self) -> Result<BuildSources> {
        BuildSources::discover(&self.project_root, &self.options, self.environment.clone())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to resolve with default args
                let cmd = super::resolve::ResolveCommand::new(
                    self.context.clone(),
                    ResolveArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
