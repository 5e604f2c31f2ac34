//! Identity generation for patterns and their descendant items.
//!
//! Every pattern instance and every item carries a [`PatternId`]: a
//! process-unique string identity generated once at creation and immutable
//! thereafter. Identities are what active-descendant tracking stores,
//! because item references and indices can go stale whenever the host
//! changes its item list.
//!
//! The default identity space is a process-wide monotonically increasing
//! counter producing identities of the literal form `cc<N>` (base-10,
//! starting at 0, one increment per generation call, never reset). Hosts
//! that need a separate deterministic identity space can construct their
//! own [`IdGenerator`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter backing [`PatternId::generate`]. Initialized once at process
/// start, never reset, never torn down.
static NEXT_PATTERN_ID: AtomicU64 = AtomicU64::new(0);

/// Prefix for identities drawn from the process-wide generator.
const DEFAULT_PREFIX: &str = "cc";

/// A process-unique string identity for a pattern or item.
///
/// The empty identity (see [`PatternId::none`]) is the sentinel for "no
/// descendant is active" and never matches a generated identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternId(String);

impl PatternId {
    /// Generate the next identity from the process-wide counter.
    ///
    /// Identities follow the format `cc<N>` with `N` strictly increasing
    /// across all calls in the process.
    pub fn generate() -> Self {
        let n = NEXT_PATTERN_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("{DEFAULT_PREFIX}{n}"))
    }

    /// The empty identity, used as the "nothing active" sentinel.
    pub fn none() -> Self {
        Self(String::new())
    }

    /// Returns `true` if this is the empty sentinel identity.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// View the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PatternId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PatternId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for PatternId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PatternId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An explicit identity-generator service with its own counter and prefix.
///
/// The process-wide generator behind [`PatternId::generate`] is shared by
/// every pattern in the process. Hosts that serialize snapshots or need a
/// deterministic identity space (tests, server-side rendering) can hold a
/// generator of their own and seed pattern construction from it.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator with the given prefix, counting from 0.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }

    /// Generate the next identity from this generator.
    pub fn next_id(&self) -> PatternId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(target: "trellis_core::id", prefix = %self.prefix, n, "generated id");
        PatternId(format!("{}{}", self.prefix, n))
    }

    /// The prefix identities from this generator carry.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct_and_increasing() {
        let ids: Vec<PatternId> = (0..16).map(|_| PatternId::generate()).collect();

        let mut numbers = Vec::new();
        for id in &ids {
            let n: u64 = id
                .as_str()
                .strip_prefix("cc")
                .expect("generated id must carry the cc prefix")
                .parse()
                .expect("generated id suffix must be a base-10 integer");
            numbers.push(n);
        }

        // Strictly increasing implies injective.
        for pair in numbers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_none_sentinel() {
        let none = PatternId::none();
        assert!(none.is_none());
        assert!(!PatternId::generate().is_none());
        assert_eq!(none, PatternId::default());
    }

    #[test]
    fn test_id_generator_has_its_own_space() {
        let generator = IdGenerator::new("opt-");
        assert_eq!(generator.next_id(), "opt-0");
        assert_eq!(generator.next_id(), "opt-1");

        let other = IdGenerator::new("opt-");
        // A fresh generator restarts its own counter.
        assert_eq!(other.next_id(), "opt-0");
    }

    #[test]
    fn test_string_comparison() {
        let id = PatternId::from("cc42");
        assert_eq!(id, "cc42");
        assert_eq!(id.to_string(), "cc42");
    }
}
