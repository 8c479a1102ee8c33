//! Signing credential resolution.

use tracing::debug;

use crate::config::KEY_STORE_VAR;
use crate::error::{BuildParamError, Result};

use super::sources::BuildSources;
use super::types::{ResolutionWarning, SigningConfig};

pub const STORE_FILE_KEY: &str = "storeFile";
pub const STORE_PASSWORD_KEY: &str = "storePassword";
pub const KEY_ALIAS_KEY: &str = "keyAlias";
pub const KEY_PASSWORD_KEY: &str = "keyPassword";

/// Keys `key.properties` must define when signing is requested.
pub const SIGNING_KEYS: [&str; 4] = [
    STORE_FILE_KEY,
    STORE_PASSWORD_KEY,
    KEY_ALIAS_KEY,
    KEY_PASSWORD_KEY,
];

/// Outcome of signing resolution.
#[derive(Debug, Default)]
pub(crate) struct SigningOutcome {
    pub signing: Option<SigningConfig>,
    pub warning: Option<ResolutionWarning>,
}

/// Build the signing config when `KEY_STORE` is set and `key.properties`
/// has entries.
pub(crate) fn resolve_signing(sources: &BuildSources) -> Result<SigningOutcome> {
    if !sources.environment.is_set(KEY_STORE_VAR) {
        debug!("{} not set; release build is unsigned", KEY_STORE_VAR);
        return Ok(SigningOutcome::default());
    }

    let Some(properties) = &sources.keystore_properties else {
        return Ok(SigningOutcome {
            signing: None,
            warning: Some(ResolutionWarning::KeystorePropertiesMissing {
                path: sources.layout.keystore_properties_path(),
            }),
        });
    };

    if properties.is_empty() {
        return Ok(SigningOutcome {
            signing: None,
            warning: Some(ResolutionWarning::KeystorePropertiesEmpty {
                path: properties.path().to_path_buf(),
            }),
        });
    }

    let require = |key: &str| -> Result<String> {
        properties.get(key).map(str::to_string).ok_or_else(|| {
            BuildParamError::config(
                key,
                format!(
                    "missing from {} while {} is set",
                    properties.path().display(),
                    KEY_STORE_VAR
                ),
            )
        })
    };

    let store_file = require(STORE_FILE_KEY)?;
    if store_file.is_empty() {
        return Err(BuildParamError::config(
            STORE_FILE_KEY,
            format!("must not be empty in {}", properties.path().display()),
        ));
    }

    let signing = SigningConfig {
        store_file: sources.layout.android_dir().join(store_file),
        store_password: require(STORE_PASSWORD_KEY)?,
        key_alias: require(KEY_ALIAS_KEY)?,
        key_password: require(KEY_PASSWORD_KEY)?,
    };
    debug!(
        "Signing with key '{}' from {}",
        signing.key_alias,
        signing.store_file.display()
    );

    Ok(SigningOutcome {
        signing: Some(signing),
        warning: None,
    })
}
