//! Properties files.
//!
//! The Android project keeps machine-local settings (`local.properties`)
//! and signing credentials (`key.properties`) in the `java.util.Properties`
//! text format:
//!
//! - [`parser`] - Parse properties content into entries
//! - [`source`] - Load optional files into a [`PropertiesSource`]
//! - [`writer`] - Render entries back to properties syntax

pub mod parser;
pub mod source;
pub mod writer;

pub use parser::{PropertiesParser, SyntaxError};
pub use source::PropertiesSource;
pub use writer::PropertiesWriter;
