//! Error types for store and selection operations

use thiserror::Error;

/// Errors that can occur when loading or selecting records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate record id: {id}")]
    DuplicateId { id: String },

    #[error("unknown record id: {id}")]
    UnknownId { id: String },
}
