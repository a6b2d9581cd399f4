//! Queue Error Types

use std::collections::TryReserveError;

use crate::core::error_handling::ContextualError;

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Queue handle is absent")]
    AbsentQueue,

    #[error("Allocation failed during {operation}")]
    AllocationFailed {
        operation: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("Queue is empty")]
    Empty,

    #[error("Queue invariant violated: {reason}")]
    InvariantViolation { reason: String },
}

impl QueueError {
    pub(crate) fn allocation(operation: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| QueueError::AllocationFailed { operation, source }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        QueueError::InvariantViolation {
            reason: reason.into(),
        }
    }
}

impl ContextualError for QueueError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
