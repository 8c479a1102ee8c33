//! Output formats for resolved build parameters.
//!
//! - [`OutputFormat::Properties`] - Flat dotted keys, readable by
//!   `java.util.Properties` from a Gradle script
//! - [`OutputFormat::Json`] - Pretty-printed JSON
//! - [`OutputFormat::Yaml`] - YAML
//!
//! All formats carry signing passwords in clear; the packaging step needs them.

pub mod parameters;

pub use parameters::BuildParameters;

use serde_json::Value;
use std::fmt;

use crate::error::{BuildParamError, Result};
use crate::properties::PropertiesWriter;
use crate::resolver::ResolvedBuildConfig;

/// Output format for `buildparam resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Properties,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Properties => "properties",
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

/// Render a resolved configuration.
///
/// # Example
///
/// ```
/// use buildparam::render::{render, OutputFormat};
/// use buildparam::resolver::ResolvedBuildConfig;
///
/// let output = render(&ResolvedBuildConfig::default(), OutputFormat::Properties).unwrap();
/// assert!(output.contains("applicationId=com.example.app\n"));
/// assert!(output.contains("release.minifyEnabled=true\n"));
/// ```
pub fn render(config: &ResolvedBuildConfig, format: OutputFormat) -> Result<String> {
    let params = BuildParameters::new(config);
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&params)
                .map_err(|e| BuildParamError::Other(e.into()))?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&params).map_err(|e| BuildParamError::Other(e.into()))
        }
        OutputFormat::Properties => {
            let value =
                serde_json::to_value(&params).map_err(|e| BuildParamError::Other(e.into()))?;
            let mut writer = PropertiesWriter::new();
            writer.comment("Resolved by buildparam");
            flatten_into(&mut writer, "", &value);
            Ok(writer.render())
        }
    }
}

/// Write nested objects as dotted keys; arrays become comma-separated values.
fn flatten_into(writer: &mut PropertiesWriter, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(writer, &key, nested);
            }
        }
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().map(scalar).collect();
            writer.entry(prefix, joined.join(","));
        }
        Value::Null => {}
        other => writer.entry(prefix, scalar(other)),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, ProjectLayout, KEY_STORE_VAR};
    use crate::properties::{PropertiesParser, PropertiesSource};
    use crate::resolver::{resolve, BuildSources};

    fn signed_config() -> ResolvedBuildConfig {
        let keystore = PropertiesSource::from_pairs(
            "/p/android/key.properties",
            [
                ("storeFile", "upload.jks"),
                ("storePassword", "s p=w"),
                ("keyAlias", "upload"),
                ("keyPassword", "kp"),
            ],
        );
        let sources = BuildSources::new(ProjectLayout::new("/p"))
            .with_environment(Environment::from_pairs([(KEY_STORE_VAR, "1")]))
            .with_keystore_properties(keystore);
        resolve(&sources).unwrap()
    }

    #[test]
    fn properties_output_parses_back() {
        let output = render(&signed_config(), OutputFormat::Properties).unwrap();

        let entries = PropertiesParser::parse(&output).unwrap();
        let get = |k: &str| entries.get(k).map(String::as_str);

        assert_eq!(get("applicationId"), Some("com.example.app"));
        assert_eq!(get("namespace"), Some("com.example.app"));
        assert_eq!(get("compileSdk"), Some("35"));
        assert_eq!(get("versionName"), Some("1.0"));
        assert_eq!(get("release.signingConfig"), Some("release"));
        assert_eq!(
            get("release.proguardFiles"),
            Some("proguard-android-optimize.txt,proguard-rules.pro")
        );
        assert_eq!(get("signing.storeFile"), Some("/p/android/upload.jks"));
        assert_eq!(get("signing.storePassword"), Some("s p=w"));
        assert_eq!(get("toolchain.coreLibraryDesugaring"), Some("true"));
    }

    #[test]
    fn unsigned_properties_have_no_signing_keys() {
        let output = render(&ResolvedBuildConfig::default(), OutputFormat::Properties).unwrap();

        assert!(!output.contains("signing."));
        assert!(!output.contains("release.signingConfig"));
        assert!(output.starts_with("# Resolved by buildparam\n"));
    }

    #[test]
    fn json_output_is_structured() {
        let output = render(&signed_config(), OutputFormat::Json).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["applicationId"], "com.example.app");
        assert_eq!(value["signing"]["keyAlias"], "upload");
        assert_eq!(value["release"]["zipAlignEnabled"], true);
    }

    #[test]
    fn yaml_output_is_structured() {
        let output = render(&ResolvedBuildConfig::default(), OutputFormat::Yaml).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["targetSdk"], 35);
        assert_eq!(value["versionName"], "1.0");
    }

    #[test]
    fn output_format_names_match_cli_values() {
        use clap::ValueEnum;

        for format in OutputFormat::value_variants() {
            let name = format.to_string();
            assert_eq!(OutputFormat::from_str(&name, false), Ok(*format));
        }
        assert_eq!(OutputFormat::default().to_string(), "properties");
    }
}
