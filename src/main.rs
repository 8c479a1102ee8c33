//! buildparam CLI entry point.

use std::process::ExitCode;

use buildparam::cli::{Cli, CommandContext, CommandDispatcher};
use buildparam::config::Environment;
use buildparam::resolver::DiscoverOptions;
use buildparam::ui::{should_use_colors, OutputMode, TerminalUI, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only resolved parameters.
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is ERROR; warnings reach the user through the UI
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("buildparam=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("buildparam=error"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("buildparam starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let mut ui = TerminalUI::with_colors(output_mode, !cli.no_color && should_use_colors());

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let options = DiscoverOptions {
        settings_path: cli.config.clone(),
        android_dir: cli.android_dir.clone(),
    };
    let context = CommandContext::new(project_root, options, Environment::from_system());
    let dispatcher = CommandDispatcher::new(context);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
