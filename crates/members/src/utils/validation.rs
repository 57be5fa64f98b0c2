//! Input validation utilities.

use regex::Regex;
use roster_database::MemberPayload;

use crate::types::{MemberError, MemberResult};

/// Upper bound on every stored text field, in characters.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Trim every field and check it against the member rules.
///
/// Returns the trimmed payload that should be persisted.
pub fn validate_payload(payload: MemberPayload) -> MemberResult<MemberPayload> {
    let payload = MemberPayload {
        first_name: payload.first_name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: payload.phone.trim().to_string(),
        address: payload.address.trim().to_string(),
    };

    validate_required("first name", &payload.first_name)?;
    validate_required("email", &payload.email)?;
    validate_required("phone", &payload.phone)?;
    validate_required("address", &payload.address)?;
    validate_email(&payload.email)?;

    Ok(payload)
}

/// Validate a required text field
pub fn validate_required(field: &str, value: &str) -> MemberResult<()> {
    if value.trim().is_empty() {
        return Err(MemberError::validation(format!("{field} is required")));
    }

    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(MemberError::validation(format!(
            "{field} too long (max {MAX_FIELD_LENGTH} characters)"
        )));
    }

    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> MemberResult<()> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|e| MemberError::validation(format!("Invalid email regex: {e}")))?;

    if !email_regex.is_match(email) {
        return Err(MemberError::validation("Invalid email format"));
    }

    Ok(())
}
