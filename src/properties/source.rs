//! Loaded properties files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildParamError, Result};

use super::parser::PropertiesParser;

/// The entries of one properties file together with where they came from.
///
/// # Example
///
/// ```
/// use buildparam::properties::PropertiesSource;
///
/// let source = PropertiesSource::from_pairs(
///     "android/key.properties",
///     [("keyAlias", "upload"), ("storeFile", "upload.jks")],
/// );
/// assert_eq!(source.get("keyAlias"), Some("upload"));
/// assert_eq!(source.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesSource {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl PropertiesSource {
    /// Create an empty source attributed to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a source from literal pairs.
    pub fn from_pairs<K, V>(
        path: impl Into<PathBuf>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: path.into(),
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse `content` as if it had been read from `path`.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let entries =
            PropertiesParser::parse(content).map_err(|e| BuildParamError::PropertiesParseError {
                path: path.clone(),
                line: e.line,
                message: e.message,
            })?;
        Ok(Self { path, entries })
    }

    /// Load and parse a properties file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Load a properties file, returning `None` if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BuildParamError::Io(e)),
        }
    }

    /// Path this source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the file had no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }
}
