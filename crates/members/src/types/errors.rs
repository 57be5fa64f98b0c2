//! Error types for member operations.

use roster_database::DatabaseError;
use thiserror::Error;

/// Result type alias for member operations
pub type MemberResult<T> = Result<T, MemberError>;

#[derive(Debug, Error)]
pub enum MemberError {
    #[error("Member not found: {id}")]
    NotFound { id: i64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

impl MemberError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
