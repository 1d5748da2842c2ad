use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    /// A required field is missing or an input failed validation. The
    /// message is user-facing and rendered verbatim by the caller.
    #[error("{0}")]
    Validation(String),

    /// An entity lookup by id came up empty.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Credential mismatch. Deliberately does not say whether the email or
    /// the password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl FlowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
