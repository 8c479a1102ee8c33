//! Secret masking.
//!
//! Signing passwords must never reach human-readable output such as
//! `buildparam show`. Machine formats produced by `buildparam resolve` carry
//! them unmasked because the packaging step needs them.
//!
//! - [`OutputMasker`] - Masks password fields
//! - [`MaskedSigning`] - A signing config safe to print

pub mod mask;

pub use mask::{MaskedSigning, OutputMasker};
