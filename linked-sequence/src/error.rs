//! # Errors
//!
//! Failures reported by the fallible (`try_*`) side of the
//! [`LinkedSequence`](crate::LinkedSequence) API.
//!
//! The panicking methods (`insert_after`, `erase_after`, ...) treat the same
//! conditions as contract violations and panic with the error's message.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

/// Why a positional operation on a sequence could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The past-the-end position was given where the anchor or a node was required.
    #[error("position is past the end of the sequence")]
    PastTheEnd,

    /// The position names an element that has since been removed.
    #[error("position refers to an element that is no longer in the sequence")]
    StalePosition,

    /// Erase-after was requested on the last position of the chain.
    #[error("position has no following element to remove")]
    NoSuccessor,

    /// Node storage could not grow.
    #[error("failed to allocate storage for a new element: {0}")]
    Alloc(#[from] TryReserveError),
}
