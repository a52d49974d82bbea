use thiserror::Error;

/// Validation failure carrying the wire name of every offending field, not
/// just the first one encountered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fields: {}", fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<String>,
}

impl ValidationError {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

/// Consume a required string field, recording its wire name when absent or
/// empty. The placeholder returned on failure never escapes: callers bail
/// before using it whenever the error list is non-empty.
pub(crate) fn require_string(
    field: &str,
    value: Option<String>,
    errors: &mut Vec<String>,
) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => {
            errors.push(field.to_string());
            String::new()
        }
    }
}

/// Consume a required positive integer field, same error protocol as
/// [`require_string`].
pub(crate) fn require_positive(field: &str, value: Option<i32>, errors: &mut Vec<String>) -> i32 {
    match value {
        Some(n) if n > 0 => n,
        _ => {
            errors.push(field.to_string());
            0
        }
    }
}

/// Patch-side rule: an omitted field is fine, a present-but-empty one is not.
pub(crate) fn reject_empty(field: &str, value: &Option<String>, errors: &mut Vec<String>) {
    if let Some(s) = value {
        if s.is_empty() {
            errors.push(field.to_string());
        }
    }
}
