//! Parameter value layering.
//!
//! This module provides priority-based parameter lookup with source
//! tracking, so every resolved value can report where it came from.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use super::environment::Environment;
use super::params::BuildParam;

/// Where a parameter value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ValueSource {
    /// Built-in default.
    Default,
    /// Project settings file.
    Settings(PathBuf),
    /// Process environment.
    Environment,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Settings(path) => write!(f, "settings ({})", path.display()),
            Self::Environment => f.write_str("environment"),
        }
    }
}

/// A layer of parameter values from a single source.
///
/// # Example
///
/// ```
/// use buildparam::config::{BuildParam, ParamLayer, ValueSource};
///
/// let mut layer = ParamLayer::new(ValueSource::Environment);
/// layer.set(BuildParam::VersionName, "2.1.0");
///
/// assert_eq!(layer.get(BuildParam::VersionName), Some("2.1.0"));
/// assert_eq!(layer.source, ValueSource::Environment);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamLayer {
    /// Values in this layer.
    pub values: HashMap<BuildParam, String>,
    /// Source of this layer.
    pub source: ValueSource,
}

impl ParamLayer {
    /// Create an empty layer.
    pub fn new(source: ValueSource) -> Self {
        Self {
            values: HashMap::new(),
            source,
        }
    }

    /// The documented built-in defaults.
    pub fn builtin_defaults() -> Self {
        let mut layer = Self::new(ValueSource::Default);
        for param in BuildParam::ALL {
            layer.set(param, param.default_value());
        }
        layer
    }

    /// Parameters overridden by the environment.
    ///
    /// Empty variables are ignored so they fall through to lower layers.
    pub fn from_environment(env: &Environment) -> Self {
        let mut layer = Self::new(ValueSource::Environment);
        for param in BuildParam::ALL {
            if let Some(value) = env.get_non_empty(param.env_var()) {
                layer.set(param, value);
            }
        }
        layer
    }

    /// Add a value to this layer.
    pub fn set(&mut self, param: BuildParam, value: impl Into<String>) {
        self.values.insert(param, value.into());
    }

    /// Get a value from this layer.
    pub fn get(&self, param: BuildParam) -> Option<&str> {
        self.values.get(&param).map(String::as_str)
    }

    /// Check if this layer has a value.
    pub fn contains(&self, param: BuildParam) -> bool {
        self.values.contains_key(&param)
    }

    /// Get the number of values in this layer.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this layer is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Manages layered parameter values.
///
/// The first layer pushed has lowest priority, the last has highest.
///
/// # Example
///
/// ```
/// use buildparam::config::{BuildParam, Environment, ParamLayer, ParamLayerStack, ValueSource};
///
/// let mut stack = ParamLayerStack::new();
/// stack.push(ParamLayer::builtin_defaults());
/// stack.push(ParamLayer::from_environment(&Environment::from_pairs([("MIN_SDK_VERSION", "24")])));
///
/// assert_eq!(stack.get(BuildParam::MinSdkVersion), Some("24"));
/// assert_eq!(stack.source_of(BuildParam::MinSdkVersion), Some(&ValueSource::Environment));
/// assert_eq!(stack.source_of(BuildParam::VersionCode), Some(&ValueSource::Default));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamLayerStack {
    /// Layers from lowest to highest priority.
    layers: Vec<ParamLayer>,
}

impl ParamLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer above the existing ones.
    pub fn push(&mut self, layer: ParamLayer) {
        self.layers.push(layer);
    }

    /// Value and source from the highest priority layer holding `param`.
    pub fn lookup(&self, param: BuildParam) -> Option<(&str, &ValueSource)> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.get(param).map(|value| (value, &layer.source)))
    }

    /// Get the resolved value for a parameter.
    pub fn get(&self, param: BuildParam) -> Option<&str> {
        self.lookup(param).map(|(value, _)| value)
    }

    /// Get the source of a parameter's value.
    pub fn source_of(&self, param: BuildParam) -> Option<&ValueSource> {
        self.lookup(param).map(|(_, source)| source)
    }

    /// Get all layers for inspection.
    pub fn layers(&self) -> &[ParamLayer] {
        &self.layers
    }

    /// Get the number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_layers_override_lower() {
        let mut stack = ParamLayerStack::new();
        stack.push(ParamLayer::builtin_defaults());

        let mut settings = ParamLayer::new(ValueSource::Settings(PathBuf::from(".buildparam.yml")));
        settings.set(BuildParam::PackageName, "com.acme.app");
        stack.push(settings);

        assert_eq!(stack.get(BuildParam::PackageName), Some("com.acme.app"));
        assert_eq!(stack.get(BuildParam::VersionName), Some("1.0"));
    }

    #[test]
    fn tracks_value_source() {
        let mut stack = ParamLayerStack::new();
        stack.push(ParamLayer::builtin_defaults());
        let path = PathBuf::from("/p/.buildparam.yml");
        let mut settings = ParamLayer::new(ValueSource::Settings(path.clone()));
        settings.set(BuildParam::MinSdkVersion, "23");
        stack.push(settings);

        assert_eq!(
            stack.source_of(BuildParam::MinSdkVersion),
            Some(&ValueSource::Settings(path))
        );
        assert_eq!(
            stack.source_of(BuildParam::TargetSdkVersion),
            Some(&ValueSource::Default)
        );
    }

    #[test]
    fn environment_layer_skips_empty_values() {
        let env = Environment::from_pairs([("PKG_NAME", ""), ("VERSION_CODE", "7")]);

        let layer = ParamLayer::from_environment(&env);

        assert!(!layer.contains(BuildParam::PackageName));
        assert_eq!(layer.get(BuildParam::VersionCode), Some("7"));
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn builtin_defaults_cover_every_param() {
        let layer = ParamLayer::builtin_defaults();

        for param in BuildParam::ALL {
            assert!(layer.contains(param), "{param}");
        }
    }

    #[test]
    fn missing_param_returns_none() {
        let stack = ParamLayerStack::new();
        assert_eq!(stack.get(BuildParam::VersionCode), None);
        assert_eq!(stack.source_of(BuildParam::VersionCode), None);
    }

    #[test]
    fn stack_layer_count() {
        let mut stack = ParamLayerStack::default();
        assert_eq!(stack.layer_count(), 0);

        stack.push(ParamLayer::new(ValueSource::Default));
        stack.push(ParamLayer::new(ValueSource::Environment));
        assert_eq!(stack.layer_count(), 2);
        assert!(stack.layers()[0].is_empty());
    }

    #[test]
    fn value_source_display() {
        assert_eq!(ValueSource::Default.to_string(), "default");
        assert_eq!(ValueSource::Environment.to_string(), "environment");
        assert_eq!(
            ValueSource::Settings(PathBuf::from("x.yml")).to_string(),
            "settings (x.yml)"
        );
    }
}
