//! Integration tests for the resolver public API.

use buildparam::config::{BuildParam, Environment, ProjectLayout, ValueSource, KEY_STORE_VAR};
use buildparam::render::{render, OutputFormat};
use buildparam::resolver::{
    release_profile, resolve, resolve_with_report, BuildSources, DiscoverOptions,
    ResolutionWarning, ResolvedBuildConfig,
};
use buildparam::BuildParamError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn android_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("android")).unwrap();
    temp
}

#[test]
fn public_api_is_accessible() {
    let _config = ResolvedBuildConfig::default();
    let _layout = ProjectLayout::new("/work/app");
    let _format = OutputFormat::Json;
    let _options = DiscoverOptions::default();
}

#[test]
fn discover_and_resolve_full_project() {
    let temp = android_project();
    fs::write(
        temp.path().join(".buildparam.yml"),
        "defaults:\n  package_name: com.acme.shop\n  version_code: 7\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("android/local.properties"),
        "# written by flutter\nflutter.sdk=/opt/flutter\nsdk.dir=/opt/android-sdk\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("android/key.properties"),
        "storeFile=../keys/upload.jks\nstorePassword=pw\nkeyAlias=upload\nkeyPassword=pw\n",
    )
    .unwrap();
    let env = Environment::from_pairs([(KEY_STORE_VAR, "1"), ("VERSION_NAME", "5.0.0")]);

    let sources = BuildSources::discover(temp.path(), &DiscoverOptions::default(), env).unwrap();
    let resolution = resolve_with_report(&sources).unwrap();
    let config = &resolution.config;

    assert_eq!(config.package_name(), "com.acme.shop");
    assert_eq!(config.version_code(), 7);
    assert_eq!(config.version_name(), "5.0.0");
    assert_eq!(config.min_sdk_version(), 21);
    assert_eq!(config.flutter_sdk(), Some(PathBuf::from("/opt/flutter").as_path()));
    assert_eq!(config.android_sdk(), Some(PathBuf::from("/opt/android-sdk").as_path()));

    let signing = config.signing().unwrap();
    assert_eq!(
        signing.store_file(),
        temp.path().join("android").join("../keys/upload.jks")
    );
    assert_eq!(config.release_profile().signing_config, Some("release"));

    assert!(matches!(
        resolution.source_of(BuildParam::PackageName),
        ValueSource::Settings(_)
    ));
    assert_eq!(
        resolution.source_of(BuildParam::VersionName),
        ValueSource::Environment
    );
    assert_eq!(
        resolution.source_of(BuildParam::TargetSdkVersion),
        ValueSource::Default
    );
    assert!(resolution.warnings.is_empty());
}

#[test]
fn discover_respects_android_dir_option() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("apps/mobile")).unwrap();
    fs::write(
        temp.path().join("apps/mobile/local.properties"),
        "flutter.sdk=/sdk/flutter\n",
    )
    .unwrap();
    let options = DiscoverOptions {
        android_dir: Some(PathBuf::from("apps/mobile")),
        ..Default::default()
    };

    let sources = BuildSources::discover(temp.path(), &options, Environment::new()).unwrap();
    let config = resolve(&sources).unwrap();

    assert_eq!(config.flutter_sdk(), Some(PathBuf::from("/sdk/flutter").as_path()));
}

#[test]
fn missing_files_resolve_to_defaults() {
    let temp = TempDir::new().unwrap();

    let sources =
        BuildSources::discover(temp.path(), &DiscoverOptions::default(), Environment::new())
            .unwrap();
    let config = resolve(&sources).unwrap();

    assert_eq!(config, ResolvedBuildConfig::default());
    assert!(config.flutter_sdk().is_none());
}

#[test]
fn key_store_without_file_warns_and_stays_unsigned() {
    let temp = android_project();
    let env = Environment::from_pairs([(KEY_STORE_VAR, "")]);

    let sources = BuildSources::discover(temp.path(), &DiscoverOptions::default(), env).unwrap();
    let resolution = resolve_with_report(&sources).unwrap();

    assert!(resolution.config.signing().is_none());
    assert_eq!(
        resolution.warnings,
        vec![ResolutionWarning::KeystorePropertiesMissing {
            path: temp.path().join("android/key.properties"),
        }]
    );
}

#[test]
fn malformed_settings_file_is_an_error() {
    let temp = android_project();
    fs::write(temp.path().join(".buildparam.yml"), "defaults:\n  colour: blue\n").unwrap();

    let err = BuildSources::discover(temp.path(), &DiscoverOptions::default(), Environment::new())
        .unwrap_err();

    assert!(matches!(err, BuildParamError::SettingsParseError { .. }));
}

#[test]
fn malformed_unicode_escape_is_an_error() {
    let temp = android_project();
    fs::write(
        temp.path().join("android/local.properties"),
        "flutter.sdk=/opt/\\u00zz\n",
    )
    .unwrap();

    let err = BuildSources::discover(temp.path(), &DiscoverOptions::default(), Environment::new())
        .unwrap_err();

    assert!(matches!(
        err,
        BuildParamError::PropertiesParseError { line: 1, .. }
    ));
}

#[test]
fn release_profile_depends_only_on_signing() {
    assert_eq!(release_profile(true).signing_config, Some("release"));
    assert_eq!(release_profile(false).signing_config, None);
    assert!(release_profile(false).minify_enabled);
    assert!(!release_profile(true).debuggable);
}

#[test]
fn rendered_json_round_trips_through_serde() {
    let config = ResolvedBuildConfig::default();

    let json = render(&config, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["compileSdk"], 35);
    assert_eq!(
        value["toolchain"]["desugarJdkLibs"],
        "com.android.tools:desugar_jdk_libs:2.1.4"
    );
}
