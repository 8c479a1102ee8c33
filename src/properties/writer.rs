//! Properties file output.

use std::fmt::Write as _;

/// Accumulates entries and renders them in properties syntax.
///
/// Entries keep insertion order. Keys and values are escaped so that
/// [`PropertiesParser`](super::PropertiesParser) reads them back unchanged;
/// anything outside printable ASCII is written as `\uXXXX`, which keeps the
/// output valid for ISO-8859-1 readers too.
///
/// # Example
///
/// ```
/// use buildparam::properties::PropertiesWriter;
///
/// let mut writer = PropertiesWriter::new();
/// writer.comment("resolved by buildparam");
/// writer.entry("applicationId", "com.example.app");
/// writer.entry("versionName", "1.0 beta");
///
/// assert_eq!(
///     writer.render(),
///     "# resolved by buildparam\napplicationId=com.example.app\nversionName=1.0 beta\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct PropertiesWriter {
    output: String,
}

impl PropertiesWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment line.
    pub fn comment(&mut self, text: &str) {
        for line in text.lines() {
            let _ = writeln!(self.output, "# {}", line);
        }
    }

    /// Append an entry.
    pub fn entry(&mut self, key: &str, value: impl AsRef<str>) {
        let _ = writeln!(
            self.output,
            "{}={}",
            escape(key, true),
            escape(value.as_ref(), false)
        );
    }

    /// Rendered content.
    pub fn render(&self) -> String {
        self.output.clone()
    }
}

/// Escape a key or value for properties output.
pub fn escape(input: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, c) in input.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
        }
    }

    out
}
