//! Configuration inputs for build parameter resolution.
//!
//! This module describes everything a resolution reads:
//! - The parameter catalogue in [`params`]
//! - The explicit environment snapshot in [`environment`]
//! - Layered values with source tracking in [`layer`]
//! - The optional project settings file in [`settings`]
//! - File locations in [`layout`]
//!
//! # Precedence
//!
//! For each scalar parameter, highest first:
//! 1. Non-empty environment variable (`PKG_NAME`, `MIN_SDK_VERSION`, ...)
//! 2. Project settings defaults (`.buildparam.yml`)
//! 3. Built-in defaults

pub mod environment;
pub mod layer;
pub mod layout;
pub mod params;
pub mod settings;

pub use environment::Environment;
pub use layer::{ParamLayer, ParamLayerStack, ValueSource};
pub use layout::{
    ProjectLayout, DEFAULT_ANDROID_DIR, KEYSTORE_PROPERTIES_FILE, LOCAL_PROPERTIES_FILE,
};
pub use params::{BuildParam, ParamKind, KEY_STORE_VAR};
pub use settings::{
    load_settings, parse_settings, read_settings, ProjectDefaults, ProjectSettings, SETTINGS_FILE,
};
