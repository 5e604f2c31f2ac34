//! Active-descendant tracking.
//!
//! The active descendant is the logically focused item within a
//! composite, tracked by identity rather than by index or reference.
//! The host owns the item list and may change it between any two calls,
//! so nothing here caches an index or an item reference; every lookup
//! resolves the stored identity against the sequence as it is right now.
//!
//! A stored identity can therefore go stale. Lookups surface that as an
//! explicit [`PatternError::NotFound`] instead of handing back a wrong
//! item.
//!
//! Disabled items are not skipped during navigation; hosts that want
//! skip-over behavior layer it in their key scheme.

use trellis_core::{PatternError, PatternId, PatternResult};

use super::contracts::{HasId, HasItems};

/// Unit state for [`HasActiveDescendant`]. Default: nothing active.
#[derive(Debug, Clone, Default)]
pub struct ActiveDescendantState {
    active_descendant_id: PatternId,
}

impl ActiveDescendantState {
    /// The identity of the active descendant; the empty sentinel when
    /// nothing is active.
    pub fn active_descendant_id(&self) -> &PatternId {
        &self.active_descendant_id
    }

    /// Store a new active-descendant identity.
    pub fn set_active_descendant_id(&mut self, id: PatternId) {
        self.active_descendant_id = id;
    }
}

/// The capability of tracking an active descendant item.
///
/// Requires item enumeration ([`HasItems`]); the item bound on that
/// contract guarantees every item exposes identity, disabled, and
/// selected state. Implementers supply the two identity accessors
/// (usually by delegating to an embedded [`ActiveDescendantState`]) and
/// inherit every operation.
pub trait HasActiveDescendant: HasItems {
    /// The identity of the active descendant; empty sentinel when none.
    fn active_descendant_id(&self) -> &PatternId;

    /// Store a new active-descendant identity.
    fn set_active_descendant_id(&mut self, id: PatternId);

    /// The index of the active descendant within the current sequence.
    ///
    /// Recomputed on every call; returns `None` when nothing is active
    /// or the stored identity no longer matches any item.
    fn active_descendant_index(&self) -> Option<usize> {
        let id = self.active_descendant_id();
        if id.is_none() {
            return None;
        }
        self.items().iter().position(|item| item.id() == id)
    }

    /// The active descendant item itself.
    ///
    /// # Errors
    ///
    /// [`PatternError::NotFound`] when nothing is active or the stored
    /// identity has gone stale.
    fn active_descendant(&self) -> PatternResult<&Self::Item> {
        let index = self
            .active_descendant_index()
            .ok_or_else(|| PatternError::NotFound {
                id: self.active_descendant_id().to_string(),
            })?;
        Ok(&self.items()[index])
    }

    /// Make the given item the active descendant.
    ///
    /// Stores the item's identity without checking membership in the
    /// current sequence; a later lookup performs the (lazy) check.
    fn activate_item(&mut self, item: &Self::Item) {
        let id = item.id().clone();
        tracing::trace!(target: "trellis::behavior", %id, "activate item");
        self.set_active_descendant_id(id);
    }

    /// Make the item at `index` the active descendant.
    ///
    /// # Errors
    ///
    /// [`PatternError::IndexOutOfRange`] when `index` is outside the
    /// current sequence.
    fn activate_item_by_index(&mut self, index: usize) -> PatternResult<()> {
        let len = self.items().len();
        let id = self
            .items()
            .get(index)
            .map(|item| item.id().clone())
            .ok_or(PatternError::IndexOutOfRange { index, len })?;
        tracing::trace!(target: "trellis::behavior", %id, index, "activate item by index");
        self.set_active_descendant_id(id);
        Ok(())
    }

    /// Move activation to the next item, wrapping past the end.
    ///
    /// With nothing active (or a stale identity), activates the first
    /// item.
    ///
    /// # Errors
    ///
    /// [`PatternError::EmptySequence`] when there are no items.
    fn activate_next_item(&mut self) -> PatternResult<()> {
        let len = self.items().len();
        if len == 0 {
            return Err(PatternError::EmptySequence);
        }
        let next = match self.active_descendant_index() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.activate_item_by_index(next)
    }

    /// Move activation to the previous item, wrapping past the start.
    ///
    /// With nothing active (or a stale identity), activates the last
    /// item.
    ///
    /// # Errors
    ///
    /// [`PatternError::EmptySequence`] when there are no items.
    fn activate_previous_item(&mut self) -> PatternResult<()> {
        let len = self.items().len();
        if len == 0 {
            return Err(PatternError::EmptySequence);
        }
        let previous = match self.active_descendant_index() {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.activate_item_by_index(previous)
    }

    /// Activate the first item.
    ///
    /// # Errors
    ///
    /// [`PatternError::EmptySequence`] when there are no items.
    fn activate_first_item(&mut self) -> PatternResult<()> {
        if self.items().is_empty() {
            return Err(PatternError::EmptySequence);
        }
        self.activate_item_by_index(0)
    }

    /// Activate the last item.
    ///
    /// # Errors
    ///
    /// [`PatternError::EmptySequence`] when there are no items.
    fn activate_last_item(&mut self) -> PatternResult<()> {
        let len = self.items().len();
        if len == 0 {
            return Err(PatternError::EmptySequence);
        }
        self.activate_item_by_index(len - 1)
    }
}
