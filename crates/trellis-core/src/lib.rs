//! Core services for Trellis.
//!
//! This crate provides the foundational components shared by the Trellis
//! behavior-pattern layer:
//!
//! - **Identity Generation**: Process-unique identities for pattern
//!   instances and their descendant items
//! - **Pattern Errors**: The error surface for behavior operations
//! - **Logging Targets**: `tracing` target constants for filtering
//!
//! # Identity Example
//!
//! ```
//! use trellis_core::PatternId;
//!
//! // Each call produces a distinct identity of the form `cc<N>`.
//! let first = PatternId::generate();
//! let second = PatternId::generate();
//! assert_ne!(first, second);
//! assert!(first.as_str().starts_with("cc"));
//! ```
//!
//! # Error Example
//!
//! ```
//! use trellis_core::{PatternError, PatternResult};
//!
//! fn resolve(index: usize, len: usize) -> PatternResult<usize> {
//!     if index >= len {
//!         return Err(PatternError::IndexOutOfRange { index, len });
//!     }
//!     Ok(index)
//! }
//!
//! assert!(resolve(3, 3).is_err());
//! ```

mod error;
mod id;
pub mod logging;

pub use error::{PatternError, PatternResult};
pub use id::{IdGenerator, PatternId};
