//! The option pattern: a single selectable, focusable item.

use trellis_core::PatternId;

use crate::behavior::{
    CanBeDisabled, CanBeSelected, DisabledState, HasId, SelectedState, UniqueId,
};

/// A ready-made listbox item.
///
/// Carries exactly the capabilities the item bound on
/// [`HasItems`](crate::behavior::HasItems) demands: a unique identity
/// plus disabled and selected flags, along with a display label for the
/// host's convenience. Hosts with richer item models can ignore this
/// type and implement the three item contracts on their own.
#[derive(Debug, Clone)]
pub struct OptionItem {
    id: UniqueId,
    disabled: DisabledState,
    selected: SelectedState,
    label: String,
}

impl OptionItem {
    /// Create an option with a freshly generated identity.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: UniqueId::generate(),
            disabled: DisabledState::default(),
            selected: SelectedState::default(),
            label: label.into(),
        }
    }

    /// Create an option with a pre-existing identity.
    pub fn with_id(id: PatternId, label: impl Into<String>) -> Self {
        Self {
            id: UniqueId::from_id(id),
            disabled: DisabledState::default(),
            selected: SelectedState::default(),
            label: label.into(),
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

impl HasId for OptionItem {
    fn id(&self) -> &PatternId {
        self.id.id()
    }
}

impl CanBeDisabled for OptionItem {
    fn is_disabled(&self) -> bool {
        self.disabled.is_disabled()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled.set_disabled(disabled);
    }
}

impl CanBeSelected for OptionItem {
    fn is_selected(&self) -> bool {
        self.selected.is_selected()
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected.set_selected(selected);
    }
}
