//! The parameter set handed to the packaging tool.

use serde::Serialize;
use std::path::Path;

use crate::resolver::{ReleaseProfile, ResolvedBuildConfig, SigningConfig, Toolchain, TOOLCHAIN};

/// Named build parameters, as the Gradle Android DSL calls them.
///
/// Serialized field order is the order the packaging tool reads them in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildParameters<'a> {
    pub application_id: &'a str,
    pub namespace: &'a str,
    pub compile_sdk: u32,
    pub min_sdk: u32,
    pub target_sdk: u32,
    pub version_code: u32,
    pub version_name: &'a str,
    pub release: &'static ReleaseProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing: Option<&'a SigningConfig>,
    pub toolchain: Toolchain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flutter_sdk: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_sdk: Option<&'a Path>,
}

impl<'a> BuildParameters<'a> {
    /// View a resolved configuration as build parameters.
    pub fn new(config: &'a ResolvedBuildConfig) -> Self {
        Self {
            application_id: config.package_name(),
            namespace: config.package_name(),
            compile_sdk: config.compile_sdk_version(),
            min_sdk: config.min_sdk_version(),
            target_sdk: config.target_sdk_version(),
            version_code: config.version_code(),
            version_name: config.version_name(),
            release: config.release_profile(),
            signing: config.signing(),
            toolchain: TOOLCHAIN,
            flutter_sdk: config.flutter_sdk(),
            android_sdk: config.android_sdk(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_follows_application_id() {
        let config = ResolvedBuildConfig::default();

        let params = BuildParameters::new(&config);

        assert_eq!(params.application_id, "com.example.app");
        assert_eq!(params.namespace, params.application_id);
    }

    #[test]
    fn unsigned_parameters_omit_signing() {
        let config = ResolvedBuildConfig::default();

        let json = serde_json::to_value(BuildParameters::new(&config)).unwrap();

        assert!(json.get("signing").is_none());
        assert!(json["release"].get("signingConfig").is_none());
        assert_eq!(json["minSdk"], 21);
        assert_eq!(json["toolchain"]["javaVersion"], 11);
    }
}
