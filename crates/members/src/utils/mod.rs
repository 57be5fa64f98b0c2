pub mod validation;

pub use validation::{validate_email, validate_payload, validate_required, MAX_FIELD_LENGTH};
