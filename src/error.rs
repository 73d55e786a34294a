//! Error types for dictionary operations.

use thiserror::Error;

use crate::value::TypeTag;

/// Alias for results produced by fallible dictionary operations.
pub type Result<T> = std::result::Result<T, DictError>;

/// The error type for all fallible operations in this crate.
///
/// Every variant is fatal to the call that raised it, but never to the
/// dictionary itself; catching the error and continuing is expected usage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictError {
    /// A key or value's runtime type does not satisfy the dictionary's
    /// declared tags. Raised by `add`, and by `map` when the output
    /// dictionary rejects a transformed entry.
    #[error("dictionary<{key_type}, {value_type}> given {given}")]
    TypeMismatch {
        /// The dictionary's declared key tag.
        key_type: TypeTag,
        /// The dictionary's declared value tag.
        value_type: TypeTag,
        /// The runtime type name of the offending key or value.
        given: &'static str,
    },

    /// No entry's key strictly matched the lookup key.
    #[error("no entry matches the requested key")]
    NotFound,

    /// The cursor is not positioned on an entry.
    #[error("cursor is not positioned on an entry")]
    IterationError,
}
