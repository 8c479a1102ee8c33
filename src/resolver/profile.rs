//! Release build-type profile and toolchain constants.
//!
//! Signed and unsigned release builds share every packaging flag; the only
//! difference is whether the `release` signing config is attached. Both
//! cases live in one table keyed by "signing present".

use serde::Serialize;

/// Flags applied to the `release` build type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseProfile {
    pub minify_enabled: bool,
    pub shrink_resources: bool,
    pub debuggable: bool,
    pub jni_debuggable: bool,
    pub renderscript_debuggable: bool,
    pub pseudo_locales_enabled: bool,
    pub zip_align_enabled: bool,
    /// ProGuard/R8 rule files, in order.
    pub proguard_files: &'static [&'static str],
    /// Name of the signing config to attach, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_config: Option<&'static str>,
}

const UNSIGNED_RELEASE: ReleaseProfile = ReleaseProfile {
    minify_enabled: true,
    shrink_resources: true,
    debuggable: false,
    jni_debuggable: false,
    renderscript_debuggable: false,
    pseudo_locales_enabled: false,
    zip_align_enabled: true,
    proguard_files: &["proguard-android-optimize.txt", "proguard-rules.pro"],
    signing_config: None,
};

/// Indexed by `signing present as usize`.
static RELEASE_PROFILES: [ReleaseProfile; 2] = [
    UNSIGNED_RELEASE,
    ReleaseProfile {
        signing_config: Some("release"),
        ..UNSIGNED_RELEASE
    },
];

/// The release profile for a build with or without signing credentials.
pub fn release_profile(signed: bool) -> &'static ReleaseProfile {
    &RELEASE_PROFILES[usize::from(signed)]
}

/// Fixed compile options of the Android module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolchain {
    /// Java source and target compatibility.
    pub java_version: u8,
    /// Kotlin `jvmTarget`.
    pub kotlin_jvm_target: &'static str,
    pub core_library_desugaring: bool,
    /// Maven coordinate of the desugaring library.
    pub desugar_jdk_libs: &'static str,
}

/// The toolchain every build uses.
pub const TOOLCHAIN: Toolchain = Toolchain {
    java_version: 11,
    kotlin_jvm_target: "11",
    core_library_desugaring: true,
    desugar_jdk_libs: "com.android.tools:desugar_jdk_libs:2.1.4",
};
