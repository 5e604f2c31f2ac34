//! Selected-descendant tracking.
//!
//! Selection is distinct from activation: the active descendant is where
//! keyboard focus logically sits, a selected descendant is an item the
//! user has chosen. The two coordinate through
//! [`toggle_active_item_selection`](HasSelectedDescendant::toggle_active_item_selection).
//!
//! In single-selection mode, selecting an item first clears every other
//! item's flag, so at most one item is selected at a time. In multiple
//! mode only the target item is touched, which lets selections
//! accumulate.

use trellis_core::{PatternError, PatternId, PatternResult};

use super::active::HasActiveDescendant;
use super::contracts::{CanBeSelected, HasId};

/// Unit state for [`HasSelectedDescendant`].
///
/// Defaults: single selection, no selected-descendant mirror identity.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    multiple: bool,
    selected_descendant_id: PatternId,
}

impl SelectionState {
    /// Whether multiple selection is enabled.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Enable or disable multiple selection.
    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
    }

    /// The single-selection mirror identity.
    pub fn selected_descendant_id(&self) -> &PatternId {
        &self.selected_descendant_id
    }

    /// Store the single-selection mirror identity.
    pub fn set_selected_descendant_id(&mut self, id: PatternId) {
        self.selected_descendant_id = id;
    }
}

/// The capability of tracking selected descendant items.
///
/// Requires active-descendant tracking (and transitively item
/// enumeration); that prerequisite is a supertrait bound, so a composite
/// without the active-descendant capability cannot take this one on.
///
/// Selection targets are addressed by index within the current sequence,
/// since item state lives behind the host's `items_mut` accessor.
pub trait HasSelectedDescendant: HasActiveDescendant {
    /// Whether multiple selection is enabled.
    fn is_multiple(&self) -> bool;

    /// Enable or disable multiple selection.
    ///
    /// Switching modes does not rewrite existing item flags; the new
    /// mode applies to subsequent operations.
    fn set_multiple(&mut self, multiple: bool);

    /// Identity mirror for hosts that reflect the selection onto the
    /// container (e.g. a container-level attribute naming the chosen
    /// item in single-selection widgets).
    ///
    /// The selection operations below do not write this field; it is
    /// host-maintained state.
    fn selected_descendant_id(&self) -> &PatternId;

    /// Store the selection mirror identity.
    fn set_selected_descendant_id(&mut self, id: PatternId);

    /// Select the item at `index`.
    ///
    /// Single selection clears every item's flag first; multiple
    /// selection touches only the target.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when `index` is outside the
    /// current sequence.
    fn select_item(&mut self, index: usize) -> PatternResult<()> {
        let len = self.items().len();
        if index >= len {
            return Err(PatternError::IndexOutOfRange { index, len });
        }
        if !self.is_multiple() {
            for item in self.items_mut() {
                item.set_selected(false);
            }
        }
        let item = &mut self.items_mut()[index];
        item.set_selected(true);
        tracing::trace!(target: "trellis::behavior", id = %item.id(), index, "select item");
        Ok(())
    }

    /// Clear the selected flag of the item at `index`, unconditionally.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when `index` is outside the
    /// current sequence.
    fn deselect_item(&mut self, index: usize) -> PatternResult<()> {
        let len = self.items().len();
        if index >= len {
            return Err(PatternError::IndexOutOfRange { index, len });
        }
        let item = &mut self.items_mut()[index];
        item.set_selected(false);
        tracing::trace!(target: "trellis::behavior", id = %item.id(), index, "deselect item");
        Ok(())
    }

    /// Flip the selection state of the active descendant.
    ///
    /// # Errors
    ///
    /// [`PatternError::NotFound`] when nothing is active or the active
    /// identity has gone stale.
    fn toggle_active_item_selection(&mut self) -> PatternResult<()> {
        let index = self
            .active_descendant_index()
            .ok_or_else(|| PatternError::NotFound {
                id: self.active_descendant_id().to_string(),
            })?;
        if self.items()[index].is_selected() {
            self.deselect_item(index)
        } else {
            self.select_item(index)
        }
    }
}
