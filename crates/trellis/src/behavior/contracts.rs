//! Capability contracts.
//!
//! Each trait here names one independently composable capability: pure
//! state/behavior shape, no logic. A composite pattern implements the
//! contracts it declares, usually by delegating to the unit state structs
//! in [`super::state`].
//!
//! Capability prerequisites are supertrait bounds, so composing a
//! dependent capability onto a base that lacks its prerequisites is a
//! compile error rather than a runtime surprise. See
//! [`HasActiveDescendant`](super::HasActiveDescendant) and
//! [`HasSelectedDescendant`](super::HasSelectedDescendant) for the two
//! dependent capabilities.

use trellis_core::PatternId;

/// The capability of being disabled.
pub trait CanBeDisabled {
    /// Whether the entity is currently disabled.
    fn is_disabled(&self) -> bool;

    /// Set the disabled flag. No validation, no side effects.
    fn set_disabled(&mut self, disabled: bool);
}

/// The capability of being selected.
pub trait CanBeSelected {
    /// Whether the entity is currently selected.
    fn is_selected(&self) -> bool;

    /// Set the selected flag. No validation, no side effects.
    fn set_selected(&mut self, selected: bool);
}

/// The capability of having a unique identity.
///
/// The identity is generated once at creation and immutable thereafter.
pub trait HasId {
    /// The entity's process-unique identity.
    fn id(&self) -> &PatternId;
}

/// Layout orientation of a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items flow top to bottom (default).
    #[default]
    Vertical,
    /// Items flow in the inline direction.
    Horizontal,
}

/// The capability of having an orientation.
pub trait HasOrientation {
    /// The current orientation.
    fn orientation(&self) -> Orientation;

    /// Set the orientation.
    fn set_orientation(&mut self, orientation: Orientation);
}

/// The capability of being affected by text direction.
pub trait AffectedByRtl {
    /// Whether the surrounding text direction is right-to-left.
    fn is_rtl(&self) -> bool;

    /// Set the right-to-left flag.
    fn set_rtl(&mut self, rtl: bool);
}

/// The capability of observing host attach/detach lifecycle.
///
/// Hosts call [`connect`](Self::connect) when the pattern becomes live in
/// their framework and [`disconnect`](Self::disconnect) when it is torn
/// down. The core itself never drives these.
pub trait HasLifecycle {
    /// Whether the pattern is currently connected to a host.
    fn is_connected(&self) -> bool;

    /// Mark the pattern as connected.
    fn connect(&mut self);

    /// Mark the pattern as disconnected.
    fn disconnect(&mut self);
}

/// The capability of enumerating an ordered sequence of items.
///
/// The sequence is owned by the host adapter. The core reads it on every
/// call and never caches it, because the host may change the list between
/// any two calls. Items must expose identity, disabled, and selected
/// capabilities; that bound is what the active- and selected-descendant
/// capabilities build on.
pub trait HasItems {
    /// The item type the host supplies.
    type Item: HasId + CanBeDisabled + CanBeSelected;

    /// The current ordered item sequence.
    fn items(&self) -> &[Self::Item];

    /// Mutable access to the current ordered item sequence.
    fn items_mut(&mut self) -> &mut [Self::Item];
}

/// The capability of holding keyboard focus.
///
/// Declared by composites but never invoked by the core: actual focus
/// movement is DOM/toolkit work, so the host's rendering layer reads and
/// acts on these primitives.
pub trait CanBeFocused {
    /// Whether the composite currently has keyboard focus.
    fn is_focused(&self) -> bool;

    /// The tab index the host should render.
    fn tab_index(&self) -> i32;

    /// Request focus from the host.
    fn focus(&mut self);

    /// Release focus back to the host.
    fn blur(&mut self);
}
