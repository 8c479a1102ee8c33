//! Properties file parsing.
//!
//! This module parses the `key=value` dialect read by Gradle build scripts
//! (the `java.util.Properties` text format).

use std::collections::HashMap;

/// A syntax error found while parsing properties content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line number where the offending logical line starts.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

/// Parses properties content into a map of entries.
///
/// # Supported Formats
///
/// - Separators: `key=value`, `key: value`, `key value`
/// - Comments: lines starting with `#` or `!`
/// - Continuations: a line ending in an odd number of backslashes joins the
///   next line, whose leading whitespace is dropped
/// - Escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other `\x` yields `x`
/// - Values keep trailing whitespace
///
/// # Example
///
/// ```
/// use buildparam::properties::PropertiesParser;
///
/// let content = r#"
/// # Signing
/// storeFile=upload-keystore.jks
/// keyAlias : upload
/// storePassword hunter2
/// "#;
///
/// let entries = PropertiesParser::parse(content).unwrap();
/// assert_eq!(entries.get("storeFile"), Some(&"upload-keystore.jks".to_string()));
/// assert_eq!(entries.get("keyAlias"), Some(&"upload".to_string()));
/// assert_eq!(entries.get("storePassword"), Some(&"hunter2".to_string()));
/// ```
pub struct PropertiesParser;

impl PropertiesParser {
    /// Parse properties content.
    ///
    /// Later duplicates of a key replace earlier ones.
    pub fn parse(content: &str) -> Result<HashMap<String, String>, SyntaxError> {
        let mut entries = HashMap::new();
        let mut lines = content.lines().enumerate();

        while let Some((index, raw)) = lines.next() {
            let line = raw.trim_start_matches(is_blank);

            // Skip blank lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = String::new();
            let mut current = line;
            loop {
                if ends_with_continuation(current) {
                    logical.push_str(&current[..current.len() - 1]);
                    match lines.next() {
                        Some((_, next)) => current = next.trim_start_matches(is_blank),
                        None => break,
                    }
                } else {
                    logical.push_str(current);
                    break;
                }
            }

            let (key, value) = split_entry(&logical);
            let to_error = |message: String| SyntaxError {
                line: index + 1,
                message,
            };
            let key = unescape(key).map_err(to_error)?;
            let value = unescape(value).map_err(to_error)?;
            entries.insert(key, value);
        }

        Ok(entries)
    }
}

/// Whitespace as understood by the properties format.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

/// A line continues when it ends in an odd run of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut separator = None;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            separator = Some(c);
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = match separator {
        Some(c) => &line[key_end + c.len_utf8()..],
        None => "",
    };
    rest = rest.trim_start_matches(is_blank);

    // `key = value`: the blank ended the key, the `=` is still ahead
    if separator.is_some_and(is_blank) {
        if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
            rest = stripped.trim_start_matches(is_blank);
        }
    }

    (key, rest)
}

/// Resolve escape sequences.
fn unescape(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }

        let Some(escape) = chars.next() else {
            break;
        };

        if escape == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = (hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()))
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .ok_or_else(|| format!("malformed \\uxxxx encoding: \\u{}", hex))?;
            units.push(unit);
            continue;
        }

        flush_units(&mut units, &mut out);
        out.push(match escape {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{000C}',
            other => other,
        });
    }

    flush_units(&mut units, &mut out);
    Ok(out)
}

/// Decode pending UTF-16 units from `\u` escapes (surrogate pairs span two escapes).
fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}
