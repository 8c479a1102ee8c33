//! Consistency checks on a resolved configuration.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{ResolutionWarning, ResolvedBuildConfig};

/// At least two dot-separated segments, each a Java identifier.
static PACKAGE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$")
        .expect("PACKAGE_NAME_REGEX must compile")
});

/// Check whether `name` is usable as an Android application id.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME_REGEX.is_match(name)
}

/// Findings that don't stop the build but usually indicate a mistake.
pub fn validate_config(config: &ResolvedBuildConfig) -> Vec<ResolutionWarning> {
    let mut warnings = Vec::new();

    if !is_valid_package_name(config.package_name()) {
        warnings.push(ResolutionWarning::InvalidPackageName {
            name: config.package_name().to_string(),
        });
    }

    if config.min_sdk_version() > config.target_sdk_version() {
        warnings.push(ResolutionWarning::MinSdkAboveTarget {
            min: config.min_sdk_version(),
            target: config.target_sdk_version(),
        });
    }

    if config.target_sdk_version() > config.compile_sdk_version() {
        warnings.push(ResolutionWarning::TargetSdkAboveCompile {
            target: config.target_sdk_version(),
            compile: config.compile_sdk_version(),
        });
    }

    warnings
}
