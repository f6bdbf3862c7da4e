use thiserror::Error;

use clearout_core::DomainError;

/// Store-level error: either a deterministic domain failure or a failed
/// remote operation.
///
/// Remote failures carry the collaborator's message for display; the
/// contract is "report to the user, leave state unchanged, no retry".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("remote operation failed: {0}")]
    Remote(String),
}

impl StoreError {
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Validation rejections are handled silently by callers (a blank-name
    /// create is a refused no-op, not a user-facing error).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(DomainError::Validation(_)))
    }
}
