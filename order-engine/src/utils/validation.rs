//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The HTTP
//! boundary deserializes payloads into typed structs; these helpers cover
//! the checks serde cannot express.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: flavor, topping, role, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Free-text order notes
pub const MAX_NOTE_LEN: usize = 500;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within
/// the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_text() {
        assert!(validate_required_text("Pepperoni", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN + 1), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_passes_when_absent() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ring twice".into()), "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some(String::new()), "notes", MAX_NOTE_LEN).is_err());
    }
}
