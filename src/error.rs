//! Error types for buildparam operations.
//!
//! This module defines [`BuildParamError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BuildParamError` for failures the caller must see (all are fatal)
//! - Use `anyhow::Error` (via `BuildParamError::Other`) for unexpected errors
//! - A missing optional source is never an error; it surfaces as a
//!   [`ResolutionWarning`](crate::resolver::ResolutionWarning)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for buildparam operations.
#[derive(Debug, Error)]
pub enum BuildParamError {
    /// A value the build committed to using is malformed or missing.
    #[error("Invalid configuration for {key}: {message}")]
    ConfigParseError { key: String, message: String },

    /// A properties file contains a malformed escape sequence.
    #[error("Failed to parse {path} at line {line}: {message}")]
    PropertiesParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The project settings file is not valid YAML for the settings schema.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// A settings file named explicitly does not exist.
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// `flutter.sdk` is required but not defined.
    #[error("Flutter SDK not found. Define location with flutter.sdk in {path}")]
    FlutterSdkNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuildParamError {
    /// Shorthand for a [`BuildParamError::ConfigParseError`].
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for buildparam operations.
pub type Result<T> = std::result::Result<T, BuildParamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_key_and_message() {
        let err = BuildParamError::config("MIN_SDK_VERSION", "expected a base-10 integer");
        let msg = err.to_string();
        assert!(msg.contains("MIN_SDK_VERSION"));
        assert!(msg.contains("expected a base-10 integer"));
    }

    #[test]
    fn properties_parse_error_displays_path_and_line() {
        let err = BuildParamError::PropertiesParseError {
            path: PathBuf::from("android/key.properties"),
            line: 3,
            message: "malformed \\uxxxx encoding".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("android/key.properties"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn settings_parse_error_displays_path() {
        let err = BuildParamError::SettingsParseError {
            path: PathBuf::from(".buildparam.yml"),
            message: "invalid type".into(),
        };
        assert!(err.to_string().contains(".buildparam.yml"));
    }

    #[test]
    fn flutter_sdk_not_found_mentions_property() {
        let err = BuildParamError::FlutterSdkNotFound {
            path: PathBuf::from("android/local.properties"),
        };
        let msg = err.to_string();
        assert!(msg.contains("flutter.sdk"));
        assert!(msg.contains("android/local.properties"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BuildParamError = io_err.into();
        assert!(matches!(err, BuildParamError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: BuildParamError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
