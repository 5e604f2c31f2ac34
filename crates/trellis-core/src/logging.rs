//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Behavior operations log at `trace` level only; the library never logs
//! on the success path above that.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=trellis::keyscheme=trace`, or when building filter layers
/// in subscriber setup code.
///
/// The `tracing` macros require `target:` to be a string literal, so the
/// emission sites repeat these strings; the constants are the documented
/// list for the host's filtering side, and the tests below pin the two
/// in sync.
pub mod targets {
    /// Identity generation target.
    pub const ID: &str = "trellis_core::id";
    /// Capability behavior target (activation, selection).
    pub const BEHAVIOR: &str = "trellis::behavior";
    /// Composite pattern target.
    pub const PATTERN: &str = "trellis::pattern";
    /// Key-scheme dispatch target.
    pub const KEYSCHEME: &str = "trellis::keyscheme";
}

#[cfg(test)]
mod tests {
    use super::targets;

    // Emission sites hardcode these strings; a rename must update both
    // sides or host filter directives silently stop matching.
    #[test]
    fn test_target_names_are_stable() {
        assert_eq!(targets::ID, "trellis_core::id");
        assert_eq!(targets::BEHAVIOR, "trellis::behavior");
        assert_eq!(targets::PATTERN, "trellis::pattern");
        assert_eq!(targets::KEYSCHEME, "trellis::keyscheme");
    }
}
