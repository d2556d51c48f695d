//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures (validation,
/// conflicts, stock shortfalls). Every failure is returned to the immediate
/// caller as a value; nothing here is logged or retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A field failed a static constraint. Recoverable by correcting input.
    #[error("validation failed for `{field}`: {reason} (rejected value: {rejected:?})")]
    Validation {
        field: &'static str,
        rejected: String,
        reason: String,
    },

    /// A uniqueness constraint was violated (e.g. duplicate SKU).
    #[error("conflict on `{field}`: {value:?} is already in use")]
    Conflict { field: &'static str, value: String },

    /// A reservation asked for more units than are on hand. A business-rule
    /// failure, not a bug; reported verbatim with the numbers the caller
    /// needs to decide on a retry.
    #[error("insufficient stock for item {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        requested: i64,
        available: i64,
    },

    /// A referenced item does not exist.
    #[error("item {id} not found")]
    NotFound { id: ItemId },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Unexpected infrastructure failure (e.g. poisoned store lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn validation(
        field: &'static str,
        rejected: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            rejected: rejected.into(),
            reason: reason.into(),
        }
    }

    pub fn conflict(field: &'static str, value: impl Into<String>) -> Self {
        Self::Conflict {
            field,
            value: value.into(),
        }
    }

    pub fn insufficient_stock(item_id: ItemId, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            item_id,
            requested,
            available,
        }
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
