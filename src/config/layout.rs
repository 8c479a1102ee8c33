//! Project directory layout.

use std::path::{Path, PathBuf};

use super::settings::SETTINGS_FILE;

/// Android project directory, relative to the project root.
pub const DEFAULT_ANDROID_DIR: &str = "android";

/// Machine-local settings file inside the Android directory.
pub const LOCAL_PROPERTIES_FILE: &str = "local.properties";

/// Signing credentials file inside the Android directory.
pub const KEYSTORE_PROPERTIES_FILE: &str = "key.properties";

/// Locations of the files a resolution reads.
///
/// Relative keystore paths are resolved against [`ProjectLayout::android_dir`].
///
/// # Example
///
/// ```
/// use buildparam::config::ProjectLayout;
/// use std::path::Path;
///
/// let layout = ProjectLayout::new("/work/app");
/// assert_eq!(layout.android_dir(), Path::new("/work/app/android"));
/// assert_eq!(
///     layout.keystore_properties_path(),
///     Path::new("/work/app/android/key.properties")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_root: PathBuf,
    android_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout with the Android project at `<root>/android`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let android_dir = project_root.join(DEFAULT_ANDROID_DIR);
        Self {
            project_root,
            android_dir,
        }
    }

    /// Use a different Android directory; relative paths are taken from the project root.
    pub fn with_android_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.android_dir = self.project_root.join(dir);
        self
    }

    /// Project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Android project directory.
    pub fn android_dir(&self) -> &Path {
        &self.android_dir
    }

    /// `local.properties` path.
    pub fn local_properties_path(&self) -> PathBuf {
        self.android_dir.join(LOCAL_PROPERTIES_FILE)
    }

    /// `key.properties` path.
    pub fn keystore_properties_path(&self) -> PathBuf {
        self.android_dir.join(KEYSTORE_PROPERTIES_FILE)
    }

    /// Default settings file path.
    pub fn settings_path(&self) -> PathBuf {
        self.project_root.join(SETTINGS_FILE)
    }
}
