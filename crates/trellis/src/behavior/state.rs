//! Capability unit states.
//!
//! Minimal implementations of the simple capability contracts: one
//! mutable field with a fixed default each, no validation, no side
//! effects beyond the field write. They are independent of one another
//! and may be embedded in a composite in any order relative to each
//! other.
//!
//! A composite satisfies a contract by embedding the matching unit and
//! delegating, e.g.:
//!
//! ```ignore
//! impl CanBeDisabled for MyPattern {
//!     fn is_disabled(&self) -> bool { self.disabled.is_disabled() }
//!     fn set_disabled(&mut self, disabled: bool) { self.disabled.set_disabled(disabled) }
//! }
//! ```

use trellis_core::PatternId;

use super::contracts::Orientation;

/// Unit state for [`CanBeDisabled`](super::CanBeDisabled). Default: not disabled.
#[derive(Debug, Clone, Default)]
pub struct DisabledState {
    disabled: bool,
}

impl DisabledState {
    /// Whether the flag is set.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set the flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

/// Unit state for [`CanBeSelected`](super::CanBeSelected). Default: not selected.
#[derive(Debug, Clone, Default)]
pub struct SelectedState {
    selected: bool,
}

impl SelectedState {
    /// Whether the flag is set.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Unit state for [`HasId`](super::HasId). Default: the next generated identity.
#[derive(Debug, Clone)]
pub struct UniqueId {
    id: PatternId,
}

impl UniqueId {
    /// Draw the next identity from the process-wide generator.
    pub fn generate() -> Self {
        Self {
            id: PatternId::generate(),
        }
    }

    /// Wrap a pre-existing identity, e.g. one drawn from a host-owned
    /// [`IdGenerator`](trellis_core::IdGenerator).
    pub fn from_id(id: PatternId) -> Self {
        Self { id }
    }

    /// The wrapped identity.
    pub fn id(&self) -> &PatternId {
        &self.id
    }
}

impl Default for UniqueId {
    fn default() -> Self {
        Self::generate()
    }
}

/// Unit state for [`HasOrientation`](super::HasOrientation). Default: vertical.
#[derive(Debug, Clone, Default)]
pub struct OrientationState {
    orientation: Orientation,
}

impl OrientationState {
    /// The stored orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

/// Unit state for [`AffectedByRtl`](super::AffectedByRtl). Default: left-to-right.
#[derive(Debug, Clone, Default)]
pub struct RtlState {
    rtl: bool,
}

impl RtlState {
    /// Whether the flag is set.
    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    /// Set the flag.
    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }
}

/// Unit state for [`HasLifecycle`](super::HasLifecycle). Default: disconnected.
#[derive(Debug, Clone, Default)]
pub struct LifecycleState {
    connected: bool,
}

impl LifecycleState {
    /// Whether the pattern is connected.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Mark connected.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Mark disconnected.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_defaults() {
        assert!(!DisabledState::default().is_disabled());
        assert!(!SelectedState::default().is_selected());
        assert_eq!(OrientationState::default().orientation(), Orientation::Vertical);
        assert!(!RtlState::default().is_rtl());
        assert!(!LifecycleState::default().is_connected());
    }

    #[test]
    fn test_unique_id_default_generates() {
        let a = UniqueId::default();
        let b = UniqueId::default();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_field_writes() {
        let mut disabled = DisabledState::default();
        disabled.set_disabled(true);
        assert!(disabled.is_disabled());

        let mut lifecycle = LifecycleState::default();
        lifecycle.connect();
        assert!(lifecycle.is_connected());
        lifecycle.disconnect();
        assert!(!lifecycle.is_connected());
    }
}
