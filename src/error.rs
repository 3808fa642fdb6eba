//! Error types shared by every module.

use thiserror::Error;

/// Errors surfaced by sequence operations.
///
/// Pair generation never fails: elements whose transformed key is absent
/// are skipped rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The operation needs at least one element.
    #[error("{operation} requires a non-empty sequence")]
    EmptyInput {
        /// Name of the operation that rejected the input.
        operation: &'static str,
    },

    /// A field-keyed lookup named a field the element type does not expose.
    #[error("type `{type_name}` has no field named `{field}`")]
    TypeMismatch {
        /// The requested field name.
        field: String,
        /// Element type the lookup was made against.
        type_name: &'static str,
    },
}

/// Convenience alias for results carrying a [`SeqError`].
pub type Result<T> = std::result::Result<T, SeqError>;
