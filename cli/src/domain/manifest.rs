//! `package.json` name rewrite.
//!
//! Pure functions only — the caller reads and writes the file.

use serde_json::Value;

use crate::domain::error::ManifestError;

/// Line ending appended after the serialised manifest.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line ending appended after the serialised manifest.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Longest package name the npm registry accepts.
pub const MAX_PACKAGE_NAME_LEN: usize = 214;

/// Why `name` would be refused as a new npm package name, if it would be.
///
/// The rename still goes ahead; package managers only object at publish or
/// install time.
#[must_use]
pub fn package_name_problem(name: &str) -> Option<&'static str> {
    if name.len() > MAX_PACKAGE_NAME_LEN {
        return Some("is longer than 214 characters");
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Some("starts with '.' or '_'");
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("contains capital letters");
    }
    if name
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_')))
    {
        return Some("contains characters other than a-z, 0-9, '-', '.' and '_'");
    }
    None
}

/// Set the manifest's `name` field and re-serialise it.
///
/// Output is two-space indented, keeps the original key order, and ends with
/// exactly one `line_ending`. A manifest without a `name` gets one appended.
///
/// # Errors
///
/// Returns `ManifestError::Parse` for invalid JSON and
/// `ManifestError::NotAnObject` when the top-level value is not an object.
pub fn rename_manifest(
    contents: &str,
    name: &str,
    line_ending: &str,
) -> Result<String, ManifestError> {
    let mut manifest: Value =
        serde_json::from_str(contents).map_err(|e| ManifestError::Parse(e.to_string()))?;

    let Value::Object(fields) = &mut manifest else {
        return Err(ManifestError::NotAnObject);
    };
    fields.insert("name".to_owned(), Value::String(name.to_owned()));

    let mut out =
        serde_json::to_string_pretty(&manifest).map_err(|e| ManifestError::Parse(e.to_string()))?;
    out.push_str(line_ending);
    Ok(out)
}
