//! Masking of secret values in human-readable output.
//!
//! Masking is structural: password fields are swapped for the mask before
//! anything is formatted, so escaping in the output format cannot reveal a
//! password and short passwords never hide unrelated values.

use serde::Serialize;
use std::path::Path;

use crate::resolver::SigningConfig;

/// Produces masked views of records that carry secrets.
///
/// # Example
///
/// ```
/// use buildparam::secrets::OutputMasker;
///
/// let masker = OutputMasker::new();
///
/// assert_eq!(masker.mask_secret("hunter2"), "[REDACTED]");
/// assert_eq!(masker.mask_secret(""), "");
/// ```
#[derive(Debug, Clone)]
pub struct OutputMasker {
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with default mask string.
    pub fn new() -> Self {
        Self::with_mask("[REDACTED]")
    }

    /// Create a masker with a custom mask string.
    pub fn with_mask(mask: impl Into<String>) -> Self {
        Self { mask: mask.into() }
    }

    /// The mask string.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Mask a secret field value. Empty secrets stay empty.
    pub fn mask_secret<'a>(&'a self, value: &'a str) -> &'a str {
        if value.is_empty() {
            value
        } else {
            &self.mask
        }
    }

    /// A view of `signing` with both passwords masked.
    pub fn signing<'a>(&'a self, signing: &'a SigningConfig) -> MaskedSigning<'a> {
        MaskedSigning {
            store_file: signing.store_file(),
            store_password: self.mask_secret(signing.store_password()),
            key_alias: signing.key_alias(),
            key_password: self.mask_secret(signing.key_password()),
        }
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

/// A signing config safe to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedSigning<'a> {
    pub store_file: &'a Path,
    pub store_password: &'a str,
    pub key_alias: &'a str,
    pub key_password: &'a str,
}
