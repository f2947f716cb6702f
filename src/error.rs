use thiserror::Error;
use validator::ValidationErrors;

use crate::state::{GameId, PlayerId, ResultId};

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised when a value is rejected by the ledger.
///
/// Constructors swallow these after logging them, setters hand them back to the caller.
/// In both cases a rejected value never changes the stored state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The value failed its acceptance predicate.
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        /// Name of the rejected field.
        field: &'static str,
        /// Human readable description of the failed predicate.
        reason: String,
    },
    /// The field is write-once and already holds a value.
    #[error("{field} is already set")]
    AlreadySet {
        /// Name of the locked field.
        field: &'static str,
    },
    /// The game handle does not belong to this ledger.
    #[error("unknown game `{0}`")]
    UnknownGame(GameId),
    /// The player handle does not belong to this ledger.
    #[error("unknown player `{0}`")]
    UnknownPlayer(PlayerId),
    /// The result handle does not belong to this ledger.
    #[error("unknown result `{0}`")]
    UnknownResult(ResultId),
}

impl LedgerError {
    /// Build an [`LedgerError::InvalidValue`] from the errors reported by `validator`.
    pub fn invalid(field: &'static str, errors: ValidationErrors) -> Self {
        LedgerError::InvalidValue {
            field,
            reason: format!("validation failed: {}", errors),
        }
    }

    /// Name of the field this error concerns, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LedgerError::InvalidValue { field, .. } | LedgerError::AlreadySet { field } => {
                Some(*field)
            }
            LedgerError::UnknownGame(_) => Some("game"),
            LedgerError::UnknownPlayer(_) => Some("player"),
            LedgerError::UnknownResult(_) => None,
        }
    }
}
