//! Inputs to a resolution.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{
    load_settings, read_settings, Environment, ParamLayer, ProjectDefaults, ProjectLayout,
    KEY_STORE_VAR,
};
use crate::error::Result;
use crate::properties::PropertiesSource;

/// Everything [`resolve`](super::resolve) reads, captured up front.
///
/// # Example
///
/// ```
/// use buildparam::config::{Environment, ProjectLayout};
/// use buildparam::resolver::{resolve, BuildSources};
///
/// let sources = BuildSources::new(ProjectLayout::new("/work/app"))
///     .with_environment(Environment::from_pairs([("VERSION_CODE", "12")]));
///
/// let config = resolve(&sources).unwrap();
/// assert_eq!(config.version_code(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct BuildSources {
    /// File locations; the Android directory anchors relative store files.
    pub layout: ProjectLayout,
    /// Environment snapshot.
    pub environment: Environment,
    /// `local.properties`, if present.
    pub local_properties: Option<PropertiesSource>,
    /// `key.properties`, if present (only loaded when signing is requested).
    pub keystore_properties: Option<PropertiesSource>,
    /// Project defaults from the settings file.
    pub defaults: Option<ParamLayer>,
}

/// Overrides for [`BuildSources::discover`].
#[derive(Debug, Clone, Default)]
pub struct DiscoverOptions {
    /// Settings file to read instead of `<root>/.buildparam.yml`; must exist.
    pub settings_path: Option<PathBuf>,
    /// Android directory, taking precedence over the settings file.
    pub android_dir: Option<PathBuf>,
}

impl BuildSources {
    /// Sources with no files and an empty environment.
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            environment: Environment::new(),
            local_properties: None,
            keystore_properties: None,
            defaults: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_local_properties(mut self, properties: PropertiesSource) -> Self {
        self.local_properties = Some(properties);
        self
    }

    pub fn with_keystore_properties(mut self, properties: PropertiesSource) -> Self {
        self.keystore_properties = Some(properties);
        self
    }

    /// Attach project defaults attributed to the settings file at `origin`.
    pub fn with_defaults(mut self, defaults: &ProjectDefaults, origin: &Path) -> Self {
        self.defaults = Some(defaults.to_layer(origin));
        self
    }

    /// Read the properties files for `layout`.
    ///
    /// Missing files are not errors. `key.properties` is only read when
    /// `KEY_STORE` is set.
    pub fn load(
        layout: ProjectLayout,
        defaults: Option<ParamLayer>,
        environment: Environment,
    ) -> Result<Self> {
        let local_path = layout.local_properties_path();
        let local_properties = PropertiesSource::load_optional(&local_path)?;
        debug!(
            "{} {}",
            local_path.display(),
            if local_properties.is_some() { "loaded" } else { "not found" }
        );

        let keystore_properties = if environment.is_set(KEY_STORE_VAR) {
            let keystore_path = layout.keystore_properties_path();
            let loaded = PropertiesSource::load_optional(&keystore_path)?;
            debug!(
                "{} {}",
                keystore_path.display(),
                if loaded.is_some() { "loaded" } else { "not found" }
            );
            loaded
        } else {
            None
        };

        Ok(Self {
            layout,
            environment,
            local_properties,
            keystore_properties,
            defaults,
        })
    }

    /// Locate the settings file and properties files under `project_root`.
    pub fn discover(
        project_root: &Path,
        options: &DiscoverOptions,
        environment: Environment,
    ) -> Result<Self> {
        let mut layout = ProjectLayout::new(project_root);

        // Only the implicit settings file is optional.
        let (settings_path, settings) = match &options.settings_path {
            Some(path) => (path.clone(), Some(read_settings(path)?)),
            None => {
                let path = layout.settings_path();
                let settings = load_settings(&path)?;
                (path, settings)
            }
        };
        if settings.is_some() {
            debug!("Using settings from {}", settings_path.display());
        }

        let android_dir = options
            .android_dir
            .clone()
            .or_else(|| settings.as_ref().and_then(|s| s.android_dir.clone()));
        if let Some(dir) = android_dir {
            layout = layout.with_android_dir(dir);
        }

        let defaults = settings.map(|s| s.defaults.to_layer(&settings_path));
        Self::load(layout, defaults, environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildParam;
    use crate::error::BuildParamError;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("android")).unwrap();
        temp
    }

    #[test]
    fn load_without_files_is_empty() {
        let temp = project();

        let sources =
            BuildSources::load(ProjectLayout::new(temp.path()), None, Environment::new()).unwrap();

        assert!(sources.local_properties.is_none());
        assert!(sources.keystore_properties.is_none());
    }

    #[test]
    fn keystore_file_ignored_without_key_store_var() {
        let temp = project();
        fs::write(temp.path().join("android/key.properties"), "keyAlias=upload\n").unwrap();

        let sources =
            BuildSources::load(ProjectLayout::new(temp.path()), None, Environment::new()).unwrap();

        assert!(sources.keystore_properties.is_none());
    }

    #[test]
    fn keystore_file_loaded_with_key_store_var() {
        let temp = project();
        fs::write(temp.path().join("android/key.properties"), "keyAlias=upload\n").unwrap();
        let env = Environment::from_pairs([(KEY_STORE_VAR, "https://keys.test/upload.jks")]);

        let sources = BuildSources::load(ProjectLayout::new(temp.path()), None, env).unwrap();

        let keystore = sources.keystore_properties.unwrap();
        assert_eq!(keystore.get("keyAlias"), Some("upload"));
    }

    #[test]
    fn discover_honours_settings_android_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("mobile")).unwrap();
        fs::write(
            temp.path().join(".buildparam.yml"),
            "android_dir: mobile\ndefaults:\n  version_code: 9\n",
        )
        .unwrap();
        fs::write(temp.path().join("mobile/local.properties"), "sdk.dir=/sdk\n").unwrap();

        let sources =
            BuildSources::discover(temp.path(), &DiscoverOptions::default(), Environment::new())
                .unwrap();

        assert_eq!(sources.layout.android_dir(), temp.path().join("mobile"));
        assert!(sources.local_properties.is_some());
        let defaults = sources.defaults.unwrap();
        assert_eq!(
            defaults.get(BuildParam::VersionCode),
            Some("9")
        );
    }

    #[test]
    fn discover_option_overrides_settings_android_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".buildparam.yml"), "android_dir: mobile\n").unwrap();
        let options = DiscoverOptions {
            android_dir: Some(PathBuf::from("native/android")),
            ..Default::default()
        };

        let sources = BuildSources::discover(temp.path(), &options, Environment::new()).unwrap();

        assert_eq!(
            sources.layout.android_dir(),
            temp.path().join("native/android")
        );
    }

    #[test]
    fn discover_without_settings_has_no_defaults() {
        let temp = project();

        let sources =
            BuildSources::discover(temp.path(), &DiscoverOptions::default(), Environment::new())
                .unwrap();

        assert!(sources.defaults.is_none());
    }

    #[test]
    fn discover_requires_explicit_settings_file() {
        let temp = project();
        let options = DiscoverOptions {
            settings_path: Some(temp.path().join("does-not-exist.yml")),
            ..Default::default()
        };

        let err = BuildSources::discover(temp.path(), &options, Environment::new()).unwrap_err();

        assert!(matches!(err, BuildParamError::SettingsNotFound { .. }));
    }

    #[test]
    fn discover_reads_explicit_settings_file() {
        let temp = project();
        let path = temp.path().join("ci.yml");
        fs::write(&path, "defaults:\n  version_code: 99\n").unwrap();
        let options = DiscoverOptions {
            settings_path: Some(path),
            ..Default::default()
        };

        let sources = BuildSources::discover(temp.path(), &options, Environment::new()).unwrap();

        let defaults = sources.defaults.unwrap();
        assert_eq!(defaults.get(BuildParam::VersionCode), Some("99"));
    }
}
