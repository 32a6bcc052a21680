//! Import and export of plan files.
//!
//! Export writes the full plan, completion flags included, as pretty-printed
//! UTF-8 JSON in exactly the shape [`crate::validate::validate`] accepts, so
//! `import_bytes(&export_bytes(&plan)?)` returns `plan` unchanged.

use log::debug;

use crate::{
    error::{ImportError, Result},
    models::StudyPlan,
    validate::validate,
};

/// Serializes a plan for a later round-trip import.
pub fn export_bytes(plan: &StudyPlan) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(plan)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decodes, parses, validates and normalizes a plan file.
///
/// Completion flags present in the file are preserved; missing ones default
/// to `false`.
///
/// # Errors
///
/// Returns `ImportError::ParseFailure` when the bytes are not UTF-8 JSON and
/// `ImportError::SchemaFailure` when the JSON is not a study plan.
pub fn import_bytes(bytes: &[u8]) -> std::result::Result<StudyPlan, ImportError> {
    let text = decode(bytes)?;
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ImportError::ParseFailure {
            reason: e.to_string(),
        })?;
    let draft = validate(&value)?;
    debug!("Imported plan '{}' with {} weeks", draft.title, draft.weeks.len());
    Ok(draft.into())
}

/// Reads a plain-text topics file verbatim.
pub fn import_topics(bytes: &[u8]) -> std::result::Result<String, ImportError> {
    decode(bytes).map(str::to_string)
}

/// Deterministic export file name derived from the plan title.
///
/// The title is lowercased and every run of whitespace or of characters that
/// are unsafe in a file name (path separators included) becomes one hyphen.
/// The result never starts with a dot, so it always names a plain file in the
/// current directory.
pub fn export_file_name(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        let c = if c.is_alphanumeric() || c == '_' || c == '.' {
            c
        } else {
            '-'
        };
        if !(c == '-' && stem.ends_with('-')) {
            stem.push(c);
        }
    }
    let stem = stem.trim_start_matches(['.', '-']).trim_end_matches(['.', '-']);

    if stem.is_empty() {
        "study-plan.json".to_string()
    } else {
        format!("{stem}.json")
    }
}

fn decode(bytes: &[u8]) -> std::result::Result<&str, ImportError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ImportError::ParseFailure {
        reason: format!("file is not valid UTF-8 text ({e})"),
    })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}
