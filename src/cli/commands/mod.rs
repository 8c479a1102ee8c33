//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`buildparam resolve`, `buildparam check`)
//! - One environment snapshot shared by every command
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod resolve;
pub mod show;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
