//! Error types for Trellis behavior operations.
//!
//! Every fallible behavior operation returns [`PatternResult`]. Failures
//! are local and immediate (no operation performs I/O), and they propagate
//! to the host integration layer rather than being swallowed.
//!
//! Composition mistakes (applying a capability whose prerequisites are
//! missing) are not represented here: prerequisites are supertrait bounds,
//! so an invalid composition fails to compile instead of failing at
//! runtime.

use thiserror::Error;

/// Errors that can occur while operating a behavior pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The active descendant identity does not match any item in the
    /// current sequence.
    ///
    /// The item list is owned by the host and can change between calls,
    /// so a previously valid identity may go stale at any time.
    #[error("no item matches descendant id {id:?}")]
    NotFound {
        /// The identity that failed to resolve.
        id: String,
    },

    /// An item index was outside the bounds of the current sequence.
    #[error("item index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },

    /// A navigation operation was invoked on an empty item sequence.
    #[error("operation requires a non-empty item sequence")]
    EmptySequence,
}

/// Result type for behavior operations.
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatternError::NotFound {
            id: "cc7".to_string(),
        };
        assert_eq!(err.to_string(), "no item matches descendant id \"cc7\"");

        let err = PatternError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "item index 5 out of range for sequence of length 3"
        );

        let err = PatternError::EmptySequence;
        assert_eq!(
            err.to_string(),
            "operation requires a non-empty item sequence"
        );
    }

    #[test]
    fn test_error_is_comparable() {
        assert_eq!(
            PatternError::IndexOutOfRange { index: 1, len: 0 },
            PatternError::IndexOutOfRange { index: 1, len: 0 }
        );
        assert_ne!(
            PatternError::EmptySequence,
            PatternError::IndexOutOfRange { index: 0, len: 0 }
        );
    }
}
