//! Process environment as an explicit input.
//!
//! Resolution never reads ambient process state; callers capture it once
//! with [`Environment::from_system`] and pass it in.

use std::collections::HashMap;

/// An immutable-by-convention snapshot of environment variables.
///
/// # Example
///
/// ```
/// use buildparam::config::Environment;
///
/// let env = Environment::from_pairs([("PKG_NAME", "com.acme.app"), ("KEY_STORE", "")]);
/// assert_eq!(env.get_non_empty("PKG_NAME"), Some("com.acme.app"));
/// assert!(env.is_set("KEY_STORE"));
/// assert_eq!(env.get_non_empty("KEY_STORE"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_system() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Build an environment from literal pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Set a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Get a variable's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Get a variable's value, treating an empty value as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Check if a variable is present (even if empty).
    pub fn is_set(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
