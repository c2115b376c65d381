use thiserror::Error;

/// Top-level error type for the `paddock-core` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Error from the API layer (transport, auth, server-reported).
    #[error(transparent)]
    Api(#[from] paddock_api::Error),

    /// A form field failed client-side validation; no request was made.
    #[error("Validation failed for `{field}`: {message}")]
    Validation { field: String, message: String },
}

impl CoreError {
    /// Shorthand for a validation failure on one field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if re-authentication might resolve this error.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_auth_expired())
    }
}
