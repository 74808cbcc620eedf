// ⚠️ Errors - every failure in this crate is a synchronous validation error
//
// Nothing here does I/O, so there is no transient/retryable class.
// Callers get the error unchanged and decide whether to retry with new input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Input rejected at construction or mutation time
    #[error("{field}: {message}")]
    InvalidArgument { field: String, message: String },
}

impl AccountError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the rejected field
    pub fn field(&self) -> &str {
        match self {
            AccountError::InvalidArgument { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;
