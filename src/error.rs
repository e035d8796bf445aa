//! Error type for heap operations

use crate::node::Key;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `decrease_key` was called with a negative delta
    NegativeDelta(Key),
    /// Decreasing the key would leave the range of [`Key`]
    KeyUnderflow {
        /// The node's key before the call
        key: Key,
        /// The requested decrease
        delta: Key,
    },
    /// The handle is no longer valid (the node was removed)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::NegativeDelta(delta) => {
                write!(f, "invalid argument: delta must be non-negative, got {}", delta)
            }
            HeapError::KeyUnderflow { key, delta } => {
                write!(f, "decreasing key {} by {} underflows the key range", key, delta)
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (node was removed)")
            }
        }
    }
}

impl std::error::Error for HeapError {}
