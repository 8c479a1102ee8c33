//! Build parameter resolution.
//!
//! Turns [`BuildSources`] into a [`ResolvedBuildConfig`]:
//! - [`resolve`] - Scalar parameters, signing, SDK paths
//! - [`signing`] - `KEY_STORE` gating and `key.properties` credentials
//! - [`profile`] - Release build-type table and toolchain constants
//! - [`validate`] - Non-fatal consistency warnings
//! - [`sources`] - Capturing the inputs from disk and the environment
//!
//! # Example
//!
//! ```
//! use buildparam::config::{Environment, ProjectLayout};
//! use buildparam::resolver::{resolve_with_report, BuildSources};
//!
//! let env = Environment::from_pairs([("KEY_STORE", "https://keys.test/upload.jks")]);
//! let sources = BuildSources::new(ProjectLayout::new("/work/app")).with_environment(env);
//!
//! // No key.properties: the build proceeds unsigned with a warning.
//! let resolution = resolve_with_report(&sources).unwrap();
//! assert!(resolution.config.signing().is_none());
//! assert_eq!(resolution.warnings.len(), 1);
//! ```

pub mod profile;
pub mod resolve;
pub mod signing;
pub mod sources;
pub mod types;
pub mod validate;

pub use profile::{release_profile, ReleaseProfile, Toolchain, TOOLCHAIN};
pub use resolve::{parse_integer, resolve, resolve_with_report, ANDROID_SDK_KEY, FLUTTER_SDK_KEY};
pub use signing::SIGNING_KEYS;
pub use sources::{BuildSources, DiscoverOptions};
pub use types::{Resolution, ResolutionWarning, ResolvedBuildConfig, SigningConfig};
pub use validate::{is_valid_package_name, validate_config};
