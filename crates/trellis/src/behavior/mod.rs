//! Capability system for behavior patterns.
//!
//! A capability is a named, independently composable unit of state and
//! behavior ("can be disabled", "has a unique identity", ...). This
//! module provides:
//!
//! - [Contracts](contracts): the trait per capability, pure shape
//! - [Unit states](state): minimal default-valued state per capability
//! - [Active-descendant tracking](active): dependent capability over
//!   the item sequence
//! - [Selected-descendant tracking](selection): dependent capability
//!   over active-descendant tracking
//!
//! Composite patterns (see [`crate::pattern`]) assemble these into one
//! controller type by embedding the unit states in dependency order and
//! delegating the contract impls to them. A capability whose
//! prerequisites are missing from the base does not compile: the
//! dependent traits carry their prerequisites as supertrait bounds.

pub mod active;
pub mod contracts;
pub mod selection;
pub mod state;

pub use active::{ActiveDescendantState, HasActiveDescendant};
pub use contracts::{
    AffectedByRtl, CanBeDisabled, CanBeFocused, CanBeSelected, HasId, HasItems, HasLifecycle,
    HasOrientation, Orientation,
};
pub use selection::{HasSelectedDescendant, SelectionState};
pub use state::{
    DisabledState, LifecycleState, OrientationState, RtlState, SelectedState, UniqueId,
};
