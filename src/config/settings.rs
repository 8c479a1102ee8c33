//! Project settings file.
//!
//! An optional `.buildparam.yml` at the project root can move the Android
//! directory and replace built-in defaults for a project. Environment
//! variables still take precedence over anything set here.
//!
//! `version_name` accepts a bare YAML number (`version_name: 1.0`). A float
//! is read back in its shortest form, so `1.10` becomes `"1.1"`; quote
//! version names like that.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildParamError, Result};

use super::layer::{ParamLayer, ValueSource};
use super::params::BuildParam;

/// Settings file name, relative to the project root.
pub const SETTINGS_FILE: &str = ".buildparam.yml";

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSettings {
    /// Android project directory, relative to the project root.
    pub android_dir: Option<PathBuf>,

    /// Per-project parameter defaults.
    pub defaults: ProjectDefaults,
}

/// Per-project replacements for the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectDefaults {
    pub package_name: Option<String>,
    pub compile_sdk_version: Option<u32>,
    pub min_sdk_version: Option<u32>,
    pub target_sdk_version: Option<u32>,
    pub version_code: Option<u32>,
    #[serde(deserialize_with = "string_or_number")]
    pub version_name: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {:?}",
            other
        ))),
    }
}

impl ProjectDefaults {
    /// The configured value for `param`, in its raw string form.
    pub fn value(&self, param: BuildParam) -> Option<String> {
        match param {
            BuildParam::PackageName => self.package_name.clone(),
            BuildParam::CompileSdkVersion => self.compile_sdk_version.map(|v| v.to_string()),
            BuildParam::MinSdkVersion => self.min_sdk_version.map(|v| v.to_string()),
            BuildParam::TargetSdkVersion => self.target_sdk_version.map(|v| v.to_string()),
            BuildParam::VersionCode => self.version_code.map(|v| v.to_string()),
            BuildParam::VersionName => self.version_name.clone(),
        }
    }

    /// Convert into a layer attributed to the settings file at `origin`.
    pub fn to_layer(&self, origin: &Path) -> ParamLayer {
        let mut layer = ParamLayer::new(ValueSource::Settings(origin.to_path_buf()));
        for param in BuildParam::ALL {
            if let Some(value) = self.value(param) {
                layer.set(param, value);
            }
        }
        layer
    }
}

/// Parse settings content.
///
/// An empty (or comment-only) document yields default settings.
pub fn parse_settings(content: &str, path: &Path) -> Result<ProjectSettings> {
    let to_error = |e: serde_yaml::Error| BuildParamError::SettingsParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(to_error)?;
    if value.is_null() {
        return Ok(ProjectSettings::default());
    }
    serde_yaml::from_value(value).map_err(to_error)
}

/// Load a settings file that must exist.
pub fn read_settings(path: &Path) -> Result<ProjectSettings> {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(BuildParamError::SettingsNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(BuildParamError::Io(e)),
    }
}

/// Load the settings file, returning `None` if it doesn't exist.
pub fn load_settings(path: &Path) -> Result<Option<ProjectSettings>> {
    match read_settings(path) {
        Ok(settings) => Ok(Some(settings)),
        Err(BuildParamError::SettingsNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_full_settings() {
        let yaml = r#"
android_dir: mobile/android
defaults:
  package_name: com.acme.app
  min_sdk_version: 23
  version_name: "2.0"
"#;
        let settings = parse_settings(yaml, Path::new(SETTINGS_FILE)).unwrap();

        assert_eq!(settings.android_dir, Some(PathBuf::from("mobile/android")));
        assert_eq!(settings.defaults.package_name.as_deref(), Some("com.acme.app"));
        assert_eq!(settings.defaults.min_sdk_version, Some(23));
        assert_eq!(settings.defaults.version_name.as_deref(), Some("2.0"));
        assert_eq!(settings.defaults.version_code, None);
    }

    #[test]
    fn empty_document_is_default() {
        let settings = parse_settings("# nothing\n", Path::new(SETTINGS_FILE)).unwrap();

        assert_eq!(settings, ProjectSettings::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_settings("andriod_dir: x\n", Path::new(SETTINGS_FILE)).unwrap_err();

        assert!(matches!(err, BuildParamError::SettingsParseError { .. }));
    }

    #[test]
    fn rejects_non_numeric_sdk() {
        let yaml = "defaults:\n  min_sdk_version: twenty\n";

        let err = parse_settings(yaml, Path::new(SETTINGS_FILE)).unwrap_err();

        assert!(err.to_string().contains(SETTINGS_FILE));
    }

    #[test]
    fn defaults_layer_contains_only_configured_values() {
        let defaults = ProjectDefaults {
            version_code: Some(42),
            ..Default::default()
        };

        let layer = defaults.to_layer(Path::new("/p/.buildparam.yml"));

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.get(BuildParam::VersionCode), Some("42"));
        assert_eq!(
            layer.source,
            ValueSource::Settings(PathBuf::from("/p/.buildparam.yml"))
        );
    }

    #[test]
    fn load_settings_missing_file_is_none() {
        let temp = TempDir::new().unwrap();

        let loaded = load_settings(&temp.path().join(SETTINGS_FILE)).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn read_settings_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");

        let err = read_settings(&path).unwrap_err();

        match err {
            BuildParamError::SettingsNotFound { path: missing } => assert_eq!(missing, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bare_number_version_name_is_accepted() {
        let settings = parse_settings(
            "defaults:\n  version_name: 1.0\n  version_code: 3\n",
            Path::new(SETTINGS_FILE),
        )
        .unwrap();

        assert_eq!(settings.defaults.version_name.as_deref(), Some("1.0"));
        assert_eq!(
            parse_settings("defaults:\n  version_name: 2\n", Path::new(SETTINGS_FILE))
                .unwrap()
                .defaults
                .version_name
                .as_deref(),
            Some("2")
        );
    }

    #[test]
    fn version_name_rejects_lists() {
        let err = parse_settings("defaults:\n  version_name: [1]\n", Path::new(SETTINGS_FILE))
            .unwrap_err();

        assert!(matches!(err, BuildParamError::SettingsParseError { .. }));
    }

    #[test]
    fn load_settings_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SETTINGS_FILE);
        fs::write(&path, "android_dir: app-android\n").unwrap();

        let loaded = load_settings(&path).unwrap().unwrap();

        assert_eq!(loaded.android_dir, Some(PathBuf::from("app-android")));
    }
}
