//! Resolved build configuration types.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{BuildParam, ValueSource, KEY_STORE_VAR};

use super::profile::{release_profile, ReleaseProfile};

/// Credentials the packaging step uses to sign a release artifact.
///
/// `Debug` output redacts both passwords.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningConfig {
    pub(crate) store_file: PathBuf,
    pub(crate) store_password: String,
    pub(crate) key_alias: String,
    pub(crate) key_password: String,
}

impl SigningConfig {
    /// Keystore file, resolved against the Android project directory.
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Keystore password.
    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Alias of the signing key inside the keystore.
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Password of the signing key.
    pub fn key_password(&self) -> &str {
        &self.key_password
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("store_file", &self.store_file)
            .field("store_password", &"[REDACTED]")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"[REDACTED]")
            .finish()
    }
}

/// The single record handed to the packaging step.
///
/// Only the resolver constructs one with signing attached; the `Default`
/// value is the documented default configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBuildConfig {
    pub(crate) package_name: String,
    pub(crate) compile_sdk_version: u32,
    pub(crate) min_sdk_version: u32,
    pub(crate) target_sdk_version: u32,
    pub(crate) version_code: u32,
    pub(crate) version_name: String,
    pub(crate) signing: Option<SigningConfig>,
    pub(crate) flutter_sdk: Option<PathBuf>,
    pub(crate) android_sdk: Option<PathBuf>,
}

impl Default for ResolvedBuildConfig {
    fn default() -> Self {
        Self {
            package_name: "com.example.app".to_string(),
            compile_sdk_version: 35,
            min_sdk_version: 21,
            target_sdk_version: 35,
            version_code: 1,
            version_name: "1.0".to_string(),
            signing: None,
            flutter_sdk: None,
            android_sdk: None,
        }
    }
}

impl ResolvedBuildConfig {
    /// Application identifier; also the Android namespace.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn compile_sdk_version(&self) -> u32 {
        self.compile_sdk_version
    }

    pub fn min_sdk_version(&self) -> u32 {
        self.min_sdk_version
    }

    pub fn target_sdk_version(&self) -> u32 {
        self.target_sdk_version
    }

    pub fn version_code(&self) -> u32 {
        self.version_code
    }

    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    /// Signing credentials, present only for eligible signed builds.
    pub fn signing(&self) -> Option<&SigningConfig> {
        self.signing.as_ref()
    }

    /// `flutter.sdk` from local properties.
    pub fn flutter_sdk(&self) -> Option<&Path> {
        self.flutter_sdk.as_deref()
    }

    /// `sdk.dir` from local properties.
    pub fn android_sdk(&self) -> Option<&Path> {
        self.android_sdk.as_deref()
    }

    /// Release build-type flags for this configuration.
    pub fn release_profile(&self) -> &'static ReleaseProfile {
        release_profile(self.signing.is_some())
    }

    /// The scalar value of `param` as a display string.
    pub fn param_value(&self, param: BuildParam) -> String {
        match param {
            BuildParam::PackageName => self.package_name.clone(),
            BuildParam::CompileSdkVersion => self.compile_sdk_version.to_string(),
            BuildParam::MinSdkVersion => self.min_sdk_version.to_string(),
            BuildParam::TargetSdkVersion => self.target_sdk_version.to_string(),
            BuildParam::VersionCode => self.version_code.to_string(),
            BuildParam::VersionName => self.version_name.clone(),
        }
    }
}

/// A non-fatal finding produced during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// Signing was requested but the keystore properties file is absent.
    KeystorePropertiesMissing { path: PathBuf },
    /// Signing was requested but the keystore properties file has no entries.
    KeystorePropertiesEmpty { path: PathBuf },
    /// `minSdk` is above `targetSdk`.
    MinSdkAboveTarget { min: u32, target: u32 },
    /// `targetSdk` is above `compileSdk`.
    TargetSdkAboveCompile { target: u32, compile: u32 },
    /// The application id is not a dotted sequence of Java identifiers.
    InvalidPackageName { name: String },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeystorePropertiesMissing { path } => write!(
                f,
                "{} not found but {} is set; release build will be unsigned",
                path.display(),
                KEY_STORE_VAR
            ),
            Self::KeystorePropertiesEmpty { path } => write!(
                f,
                "{} has no entries but {} is set; release build will be unsigned",
                path.display(),
                KEY_STORE_VAR
            ),
            Self::MinSdkAboveTarget { min, target } => {
                write!(f, "minSdk {} is above targetSdk {}", min, target)
            }
            Self::TargetSdkAboveCompile { target, compile } => {
                write!(f, "targetSdk {} is above compileSdk {}", target, compile)
            }
            Self::InvalidPackageName { name } => {
                write!(f, "'{}' is not a valid application id", name)
            }
        }
    }
}

/// A resolved configuration with the details of how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved record.
    pub config: ResolvedBuildConfig,
    /// Source of each scalar parameter.
    pub provenance: BTreeMap<BuildParam, ValueSource>,
    /// Non-fatal findings, in the order they were produced.
    pub warnings: Vec<ResolutionWarning>,
}

impl Resolution {
    /// Source of `param`; parameters absent from provenance came from defaults.
    pub fn source_of(&self, param: BuildParam) -> ValueSource {
        self.provenance
            .get(&param)
            .cloned()
            .unwrap_or(ValueSource::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signing() -> SigningConfig {
        SigningConfig {
            store_file: PathBuf::from("/p/android/upload.jks"),
            store_password: "store-secret".into(),
            key_alias: "upload".into(),
            key_password: "key-secret".into(),
        }
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = ResolvedBuildConfig::default();

        assert_eq!(config.package_name(), "com.example.app");
        assert_eq!(config.compile_sdk_version(), 35);
        assert_eq!(config.min_sdk_version(), 21);
        assert_eq!(config.target_sdk_version(), 35);
        assert_eq!(config.version_code(), 1);
        assert_eq!(config.version_name(), "1.0");
        assert!(config.signing().is_none());
    }

    #[test]
    fn signing_debug_redacts_passwords() {
        let rendered = format!("{:?}", signing());

        assert!(rendered.contains("upload"));
        assert!(!rendered.contains("store-secret"));
        assert!(!rendered.contains("key-secret"));
    }

    #[test]
    fn release_profile_follows_signing() {
        let unsigned = ResolvedBuildConfig::default();
        let signed = ResolvedBuildConfig {
            signing: Some(signing()),
            ..Default::default()
        };

        assert_eq!(unsigned.release_profile().signing_config, None);
        assert_eq!(signed.release_profile().signing_config, Some("release"));
    }

    #[test]
    fn param_value_renders_integers() {
        let config = ResolvedBuildConfig::default();

        assert_eq!(config.param_value(BuildParam::MinSdkVersion), "21");
        assert_eq!(config.param_value(BuildParam::PackageName), "com.example.app");
    }

    #[test]
    fn missing_keystore_warning_mentions_path_and_variable() {
        let warning = ResolutionWarning::KeystorePropertiesMissing {
            path: PathBuf::from("android/key.properties"),
        };

        let msg = warning.to_string();
        assert!(msg.contains("android/key.properties"));
        assert!(msg.contains("KEY_STORE"));
    }

    #[test]
    fn source_of_falls_back_to_default() {
        let resolution = Resolution {
            config: ResolvedBuildConfig::default(),
            provenance: BTreeMap::new(),
            warnings: vec![],
        };

        assert_eq!(resolution.source_of(BuildParam::VersionCode), ValueSource::Default);
    }
}
