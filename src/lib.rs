//! buildparam - Release build parameter resolution for Flutter Android apps.
//!
//! buildparam turns the ad-hoc inputs of an Android release build (process
//! environment, `local.properties`, `key.properties` and an optional
//! project settings file) into one validated record of build parameters,
//! and renders it for the packaging tool.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Build parameters, environment snapshot, value layering and settings
//! - [`error`] - Error types and result aliases
//! - [`properties`] - Java properties parsing and writing
//! - [`render`] - Output formats for resolved parameters
//! - [`resolver`] - Parameter resolution, signing and validation
//! - [`secrets`] - Output masking for signing passwords
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use buildparam::config::{Environment, ProjectLayout};
//! use buildparam::resolver::{resolve, BuildSources};
//!
//! let sources = BuildSources::new(ProjectLayout::new("/work/app"))
//!     .with_environment(Environment::from_pairs([("VERSION_CODE", "42")]));
//!
//! let config = resolve(&sources).unwrap();
//! assert_eq!(config.version_code(), 42);
//! assert_eq!(config.package_name(), "com.example.app");
//! assert!(config.signing().is_none());
//! ```
//!
//! For file-based discovery, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod properties;
pub mod render;
pub mod resolver;
pub mod secrets;
pub mod ui;

pub use error::{BuildParamError, Result};
