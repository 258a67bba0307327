//! Validation of fetched variables.
//!
//! A fetched name must be settable in a process environment and renderable
//! inside single quotes.

use crate::error::ValidationError;

/// Validate a variable name.
///
/// Names must:
/// - Not be empty
/// - Not contain `=`, NUL, a single quote, or whitespace
///
/// Lowercase names and names starting with a digit are accepted; the fetch
/// service already enforces its own naming rules.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }

    for (i, ch) in key.chars().enumerate() {
        let bad = match ch {
            '=' => Some("'='"),
            '\0' => Some("NUL"),
            '\'' => Some("single quote"),
            c if c.is_whitespace() => Some("whitespace"),
            _ => None,
        };
        if let Some(what) = bad {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!("{} at position {}", what, i + 1),
            });
        }
    }

    Ok(())
}

/// Validate a variable value.
///
/// Any string is allowed except one containing NUL, which no process
/// environment can hold.
///
/// # Errors
///
/// Returns `ValidationError` if the value contains NUL.
pub fn validate_value(key: &str, value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::InvalidValue {
            key: key.to_string(),
            reason: "contains NUL".to_string(),
        });
    }

    Ok(())
}
