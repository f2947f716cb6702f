//! Validation helpers for ledger inputs.

use validator::ValidationError;

/// Validates that a game title contains at least one character.
///
/// Whitespace counts: `" "` is a valid title.
///
/// # Examples
///
/// ```ignore
/// validate_title("Mario Kart") // Ok
/// validate_title("")           // Err - empty
/// ```
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        let mut err = ValidationError::new("title_empty");
        err.message = Some("Title must not be empty".into());
        return Err(err);
    }

    Ok(())
}
