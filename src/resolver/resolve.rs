//! The build parameter resolver.

use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::{BuildParam, ParamKind, ParamLayer, ParamLayerStack, ValueSource};
use crate::error::{BuildParamError, Result};
use crate::properties::PropertiesSource;

use super::signing::resolve_signing;
use super::sources::BuildSources;
use super::types::{Resolution, ResolvedBuildConfig};
use super::validate::validate_config;

/// `local.properties` key naming the Flutter SDK.
pub const FLUTTER_SDK_KEY: &str = "flutter.sdk";

/// `local.properties` key naming the Android SDK.
pub const ANDROID_SDK_KEY: &str = "sdk.dir";

/// Resolve the build configuration.
///
/// A pure function of `sources`: identical inputs give equal outputs.
/// Warnings are logged; use [`resolve_with_report`] to inspect them.
///
/// # Errors
///
/// Returns `ConfigParseError` when an integer parameter is not a strict
/// base-10 number, or when signing is requested and `key.properties` lacks
/// a required key.
pub fn resolve(sources: &BuildSources) -> Result<ResolvedBuildConfig> {
    resolve_with_report(sources).map(|resolution| resolution.config)
}

/// Resolve the build configuration, keeping provenance and warnings.
pub fn resolve_with_report(sources: &BuildSources) -> Result<Resolution> {
    let mut stack = ParamLayerStack::new();
    stack.push(ParamLayer::builtin_defaults());
    if let Some(defaults) = &sources.defaults {
        stack.push(defaults.clone());
    }
    stack.push(ParamLayer::from_environment(&sources.environment));

    let mut provenance = BTreeMap::new();
    let mut raw = |param: BuildParam| -> String {
        let (value, source) = match stack.lookup(param) {
            Some((value, source)) => (value.to_string(), source.clone()),
            None => (param.default_value().to_string(), ValueSource::Default),
        };
        debug!("{} = {:?} ({})", param, value, source);
        provenance.insert(param, source);
        value
    };

    let mut texts = BTreeMap::new();
    let mut integers = BTreeMap::new();
    for param in BuildParam::ALL {
        let value = raw(param);
        match param.kind() {
            ParamKind::Text => {
                texts.insert(param, value);
            }
            ParamKind::Integer => {
                integers.insert(param, parse_integer(param.env_var(), &value)?);
            }
        }
    }
    let mut text = |param: BuildParam| texts.remove(&param).unwrap_or_default();
    let integer = |param: BuildParam| integers.get(&param).copied().unwrap_or_default();

    let outcome = resolve_signing(sources)?;
    let mut warnings: Vec<_> = outcome.warning.into_iter().collect();

    let local = sources.local_properties.as_ref();
    let config = ResolvedBuildConfig {
        package_name: text(BuildParam::PackageName),
        compile_sdk_version: integer(BuildParam::CompileSdkVersion),
        min_sdk_version: integer(BuildParam::MinSdkVersion),
        target_sdk_version: integer(BuildParam::TargetSdkVersion),
        version_code: integer(BuildParam::VersionCode),
        version_name: text(BuildParam::VersionName),
        signing: outcome.signing,
        flutter_sdk: local.and_then(|p| path_entry(p, FLUTTER_SDK_KEY)),
        android_sdk: local.and_then(|p| path_entry(p, ANDROID_SDK_KEY)),
    };

    warnings.extend(validate_config(&config));
    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(Resolution {
        config,
        provenance,
        warnings,
    })
}

/// Strict base-10 parse: ASCII digits only, no sign, no whitespace.
///
/// # Example
///
/// ```
/// use buildparam::resolver::parse_integer;
///
/// assert_eq!(parse_integer("VERSION_CODE", "0042").unwrap(), 42);
/// assert!(parse_integer("VERSION_CODE", "+42").is_err());
/// assert!(parse_integer("VERSION_CODE", " 42").is_err());
/// ```
pub fn parse_integer(key: &str, raw: &str) -> Result<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BuildParamError::config(
            key,
            format!("expected a base-10 integer, got {:?}", raw),
        ));
    }
    raw.parse::<u32>().map_err(|_| {
        BuildParamError::config(key, format!("{} is out of range (max {})", raw, u32::MAX))
    })
}

/// A non-empty path-valued entry.
fn path_entry(properties: &PropertiesSource, key: &str) -> Option<PathBuf> {
    properties
        .get(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
