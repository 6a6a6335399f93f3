use thiserror::Error;

/// Unified error type for the numera toolkit
///
/// Input-contract violations (wrong type at the string boundary) and domain
/// violations (arguments outside a function's mathematical domain) are kept
/// as distinct variants so callers can tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Type error: expected {expected}, got {actual}")]
    Type { expected: String, actual: String },

    #[error("Domain error: {message}")]
    Domain { message: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },
}

pub type MathResult<T> = std::result::Result<T, MathError>;

impl MathError {
    pub fn domain(message: impl Into<String>) -> Self {
        MathError::Domain {
            message: message.into(),
        }
    }

    /// Check if this is a domain error
    pub fn is_domain_error(&self) -> bool {
        matches!(self, MathError::Domain { .. })
    }

    /// Check if this is a type error
    pub fn is_type_error(&self) -> bool {
        matches!(self, MathError::Type { .. })
    }
}
