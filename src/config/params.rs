//! The catalogue of scalar build parameters.

use std::fmt;

/// Environment variable whose presence requests a signed release build.
///
/// Only presence matters; an empty value still counts as set.
pub const KEY_STORE_VAR: &str = "KEY_STORE";

/// How a parameter's raw string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Used verbatim.
    Text,
    /// Strict base-10 unsigned integer.
    Integer,
}

/// A scalar parameter of the resolved build configuration.
///
/// Each parameter has an environment variable that overrides it and a
/// documented built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildParam {
    PackageName,
    CompileSdkVersion,
    MinSdkVersion,
    TargetSdkVersion,
    VersionCode,
    VersionName,
}

impl BuildParam {
    /// Every parameter, in resolution order.
    pub const ALL: [BuildParam; 6] = [
        BuildParam::PackageName,
        BuildParam::CompileSdkVersion,
        BuildParam::MinSdkVersion,
        BuildParam::TargetSdkVersion,
        BuildParam::VersionCode,
        BuildParam::VersionName,
    ];

    /// Environment variable that overrides this parameter.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::PackageName => "PKG_NAME",
            Self::CompileSdkVersion => "COMPILE_SDK_VERSION",
            Self::MinSdkVersion => "MIN_SDK_VERSION",
            Self::TargetSdkVersion => "TARGET_SDK_VERSION",
            Self::VersionCode => "VERSION_CODE",
            Self::VersionName => "VERSION_NAME",
        }
    }

    /// Built-in default.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::PackageName => "com.example.app",
            Self::CompileSdkVersion => "35",
            Self::MinSdkVersion => "21",
            Self::TargetSdkVersion => "35",
            Self::VersionCode => "1",
            Self::VersionName => "1.0",
        }
    }

    /// How the raw value is parsed.
    pub fn kind(self) -> ParamKind {
        match self {
            Self::PackageName | Self::VersionName => ParamKind::Text,
            _ => ParamKind::Integer,
        }
    }

    /// Name the Gradle Android DSL uses for this parameter.
    pub fn gradle_name(self) -> &'static str {
        match self {
            Self::PackageName => "applicationId",
            Self::CompileSdkVersion => "compileSdk",
            Self::MinSdkVersion => "minSdk",
            Self::TargetSdkVersion => "targetSdk",
            Self::VersionCode => "versionCode",
            Self::VersionName => "versionName",
        }
    }
}

impl fmt::Display for BuildParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gradle_name())
    }
}
