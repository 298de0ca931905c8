//! Form input helpers shared by the CRUD screens.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Check that every `(label, value)` pair has a non-blank value. Returns the
/// validation message for the first missing field, so a submit handler can
/// refuse to issue a request at all.
pub fn require_all(fields: &[(&'static str, &str)]) -> Result<(), String> {
    for (label, value) in fields {
        if value.trim().is_empty() {
            return Err(format!("{label} is required"));
        }
    }
    Ok(())
}

/// Split a comma-separated input into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Join list entries back into the comma-separated editing representation.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
