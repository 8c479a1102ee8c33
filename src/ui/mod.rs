//! Terminal output for the command-line interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for aligned reports
//!
//! Status messages go to stdout; warnings and errors go to stderr. Data
//! written with [`UserInterface::emit`] is never decorated or suppressed.
//!
//! # Example
//!
//! ```
//! use buildparam::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Resolved com.example.app");
//! ui.emit("applicationId=com.example.app\n");
//!
//! assert_eq!(ui.emitted(), "applicationId=com.example.app\n");
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Set the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Write machine-readable data to stdout as-is.
    fn emit(&mut self, data: &str);
}
