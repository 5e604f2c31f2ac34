//! The listbox pattern: a list of selectable, focusable options.
//!
//! [`Listbox`] is the fully assembled composite: it embeds one unit
//! state per capability, in dependency order, and implements every
//! capability contract by delegating to the matching unit or to the
//! injected host. The dependency order (identity, lifecycle, disabled,
//! orientation, text direction, active descendant, selected descendant,
//! key schemes) is a hard constraint: the
//! descendant capabilities require everything before them (the
//! supertrait bounds on [`HasActiveDescendant`] and
//! [`HasSelectedDescendant`] make a violation a compile error).
//!
//! The host adapter is an injected dependency, not a base class: it
//! supplies the ordered item sequence and the focus primitives the
//! composition step deliberately leaves abstract.
//!
//! # Example
//!
//! ```ignore
//! use trellis::event::{Key, KeyEvent};
//! use trellis::pattern::{Listbox, OptionItem};
//!
//! let mut listbox = Listbox::new(my_host);
//! listbox.activate_first_item()?;
//! listbox.handle_key(&KeyEvent::key_only(Key::ArrowDown))?;
//! listbox.toggle_active_item_selection()?;
//! ```

use trellis_core::{PatternId, PatternResult};

use crate::behavior::{
    ActiveDescendantState, AffectedByRtl, CanBeDisabled, CanBeFocused, DisabledState,
    HasActiveDescendant, HasId, HasItems, HasLifecycle, HasOrientation, HasSelectedDescendant,
    LifecycleState, Orientation, OrientationState, RtlState, SelectionState, UniqueId,
};
use crate::event::KeyEvent;
use crate::keyscheme::{
    dispatch_key, HasKeySchemes, KeyResponse, KeyScheme, ListNavigationKeyScheme,
    ListSelectionKeyScheme,
};

/// The contract a host adapter must satisfy to back a [`Listbox`].
///
/// Item enumeration plus focus primitives; see
/// [`HasItems`] and [`CanBeFocused`]. Any owning (`'static`) type
/// implementing both is a listbox host; the lifetime bound comes from
/// the type-wide key-scheme list, whose scheme objects mention the
/// assembled composite type.
pub trait ListboxHost: HasItems + CanBeFocused + 'static {}

impl<T: HasItems + CanBeFocused + 'static> ListboxHost for T {}

/// Union of all capabilities a listbox composite satisfies.
///
/// Key schemes and generic host code program against this bound rather
/// than against [`Listbox`] itself, so an alternative composite with the
/// same capability set is a drop-in replacement.
pub trait ListboxPattern:
    HasId
    + HasLifecycle
    + CanBeDisabled
    + HasOrientation
    + AffectedByRtl
    + CanBeFocused
    + HasActiveDescendant
    + HasSelectedDescendant
    + HasKeySchemes
{
}

impl<T> ListboxPattern for T where
    T: HasId
        + HasLifecycle
        + CanBeDisabled
        + HasOrientation
        + AffectedByRtl
        + CanBeFocused
        + HasActiveDescendant
        + HasSelectedDescendant
        + HasKeySchemes
{
}

/// A listbox behavior controller.
///
/// Rendering, event binding, and ARIA attribute emission stay with the
/// host; this type owns the behavior state and the operations key
/// schemes drive.
#[derive(Debug)]
pub struct Listbox<H: ListboxHost> {
    // Unit states in composition order. The descendant units at the end
    // depend on everything before them.
    id: UniqueId,
    lifecycle: LifecycleState,
    disabled: DisabledState,
    orientation: OrientationState,
    rtl: RtlState,
    active: ActiveDescendantState,
    selection: SelectionState,
    host: H,
}

impl<H: ListboxHost> Listbox<H> {
    /// The fixed key-scheme list for the listbox composite type:
    /// navigation first, then selection. Shared by reference across all
    /// instances; evaluation order is significant.
    pub const KEY_SCHEMES: &'static [&'static dyn KeyScheme<Self>] =
        &[&ListNavigationKeyScheme, &ListSelectionKeyScheme];

    /// Assemble a listbox from the default capability units.
    pub fn new(host: H) -> Self {
        ListboxBuilder::new(host).build()
    }

    /// Start a builder for selective unit substitution.
    pub fn builder(host: H) -> ListboxBuilder<H> {
        ListboxBuilder::new(host)
    }

    /// The injected host adapter.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the injected host adapter.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear the composite apart, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Offer a key event to the registered key schemes, in order.
    ///
    /// # Errors
    ///
    /// Behavior errors from the handling scheme propagate (empty item
    /// sequence, stale active descendant).
    pub fn handle_key(&mut self, event: &KeyEvent) -> PatternResult<KeyResponse> {
        dispatch_key(self, event)
    }
}

impl<H: ListboxHost> HasId for Listbox<H> {
    fn id(&self) -> &PatternId {
        self.id.id()
    }
}

impl<H: ListboxHost> HasLifecycle for Listbox<H> {
    fn is_connected(&self) -> bool {
        self.lifecycle.is_connected()
    }

    fn connect(&mut self) {
        tracing::trace!(target: "trellis::pattern", id = %self.id.id(), "listbox connected");
        self.lifecycle.connect();
    }

    fn disconnect(&mut self) {
        tracing::trace!(target: "trellis::pattern", id = %self.id.id(), "listbox disconnected");
        self.lifecycle.disconnect();
    }
}

impl<H: ListboxHost> CanBeDisabled for Listbox<H> {
    fn is_disabled(&self) -> bool {
        self.disabled.is_disabled()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled.set_disabled(disabled);
    }
}

impl<H: ListboxHost> HasOrientation for Listbox<H> {
    fn orientation(&self) -> Orientation {
        self.orientation.orientation()
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation.set_orientation(orientation);
    }
}

impl<H: ListboxHost> AffectedByRtl for Listbox<H> {
    fn is_rtl(&self) -> bool {
        self.rtl.is_rtl()
    }

    fn set_rtl(&mut self, rtl: bool) {
        self.rtl.set_rtl(rtl);
    }
}

impl<H: ListboxHost> HasItems for Listbox<H> {
    type Item = H::Item;

    fn items(&self) -> &[Self::Item] {
        self.host.items()
    }

    fn items_mut(&mut self) -> &mut [Self::Item] {
        self.host.items_mut()
    }
}

impl<H: ListboxHost> CanBeFocused for Listbox<H> {
    fn is_focused(&self) -> bool {
        self.host.is_focused()
    }

    fn tab_index(&self) -> i32 {
        self.host.tab_index()
    }

    fn focus(&mut self) {
        self.host.focus();
    }

    fn blur(&mut self) {
        self.host.blur();
    }
}

impl<H: ListboxHost> HasActiveDescendant for Listbox<H> {
    fn active_descendant_id(&self) -> &PatternId {
        self.active.active_descendant_id()
    }

    fn set_active_descendant_id(&mut self, id: PatternId) {
        self.active.set_active_descendant_id(id);
    }
}

impl<H: ListboxHost> HasSelectedDescendant for Listbox<H> {
    fn is_multiple(&self) -> bool {
        self.selection.is_multiple()
    }

    fn set_multiple(&mut self, multiple: bool) {
        self.selection.set_multiple(multiple);
    }

    fn selected_descendant_id(&self) -> &PatternId {
        self.selection.selected_descendant_id()
    }

    fn set_selected_descendant_id(&mut self, id: PatternId) {
        self.selection.set_selected_descendant_id(id);
    }
}

impl<H: ListboxHost> HasKeySchemes for Listbox<H> {
    fn key_schemes(&self) -> &'static [&'static dyn KeyScheme<Self>] {
        Self::KEY_SCHEMES
    }
}

/// Assembles a [`Listbox`] with selective substitution of individual
/// capability units.
///
/// The default mapping supplies the standard units (generated identity,
/// enabled, vertical, left-to-right, single selection); each `with_*`
/// method swaps in a replacement unit while the composition order and
/// the composite's public contract stay fixed.
#[derive(Debug)]
pub struct ListboxBuilder<H: ListboxHost> {
    host: H,
    id: Option<UniqueId>,
    disabled: DisabledState,
    orientation: OrientationState,
    rtl: RtlState,
    selection: SelectionState,
}

impl<H: ListboxHost> ListboxBuilder<H> {
    /// Start from the default unit mapping.
    pub fn new(host: H) -> Self {
        Self {
            host,
            id: None,
            disabled: DisabledState::default(),
            orientation: OrientationState::default(),
            rtl: RtlState::default(),
            selection: SelectionState::default(),
        }
    }

    /// Substitute the identity unit with a pre-seeded identity.
    pub fn with_id(mut self, id: PatternId) -> Self {
        self.id = Some(UniqueId::from_id(id));
        self
    }

    /// Substitute the disabled unit's initial state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled.set_disabled(disabled);
        self
    }

    /// Substitute the orientation unit's initial state.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation.set_orientation(orientation);
        self
    }

    /// Substitute the text-direction unit's initial state.
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl.set_rtl(rtl);
        self
    }

    /// Substitute the selection unit's multiple-selection flag.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.selection.set_multiple(multiple);
        self
    }

    /// Assemble the composite. Identity defaults to the next generated
    /// id when no substitute was provided.
    pub fn build(self) -> Listbox<H> {
        let id = self.id.unwrap_or_default();
        tracing::trace!(target: "trellis::pattern", id = %id.id(), "assembled listbox");
        Listbox {
            id,
            lifecycle: LifecycleState::default(),
            disabled: self.disabled,
            orientation: self.orientation,
            rtl: self.rtl,
            active: ActiveDescendantState::default(),
            selection: self.selection,
            host: self.host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::CanBeSelected;
    use crate::event::{Key, KeyboardModifiers};
    use crate::pattern::OptionItem;
    use trellis_core::PatternError;

    /// Minimal host adapter: a vector of options plus focus bookkeeping.
    #[derive(Debug, Default)]
    struct VecHost {
        items: Vec<OptionItem>,
        focused: bool,
        tab_index: i32,
    }

    impl VecHost {
        fn with_labels(labels: &[&str]) -> Self {
            Self {
                items: labels.iter().map(|&label| OptionItem::new(label)).collect(),
                focused: false,
                tab_index: 0,
            }
        }
    }

    impl HasItems for VecHost {
        type Item = OptionItem;

        fn items(&self) -> &[OptionItem] {
            &self.items
        }

        fn items_mut(&mut self) -> &mut [OptionItem] {
            &mut self.items
        }
    }

    impl CanBeFocused for VecHost {
        fn is_focused(&self) -> bool {
            self.focused
        }

        fn tab_index(&self) -> i32 {
            self.tab_index
        }

        fn focus(&mut self) {
            self.focused = true;
        }

        fn blur(&mut self) {
            self.focused = false;
        }
    }

    // The assembled composite satisfies the full capability union, and
    // its state is safe to move across threads.
    static_assertions::assert_impl_all!(
        Listbox<VecHost>: ListboxPattern, HasKeySchemes, Send, Sync
    );

    fn listbox(labels: &[&str]) -> Listbox<VecHost> {
        Listbox::new(VecHost::with_labels(labels))
    }

    fn selected_labels(listbox: &Listbox<VecHost>) -> Vec<&str> {
        listbox
            .items()
            .iter()
            .filter(|item| item.is_selected())
            .map(|item| item.label())
            .collect()
    }

    // =========================================================================
    // Defaults and Assembly
    // =========================================================================

    #[test]
    fn test_default_state() {
        let listbox = listbox(&["A"]);
        assert!(!listbox.is_disabled());
        assert!(!listbox.is_rtl());
        assert!(!listbox.is_multiple());
        assert!(!listbox.is_connected());
        assert_eq!(listbox.orientation(), Orientation::Vertical);
        assert!(listbox.active_descendant_id().is_none());
        assert!(listbox.selected_descendant_id().is_none());
        assert!(listbox.id().as_str().starts_with("cc"));
    }

    #[test]
    fn test_builder_substitutes_units() {
        let listbox = Listbox::builder(VecHost::with_labels(&["A"]))
            .with_id(PatternId::from("host-listbox"))
            .orientation(Orientation::Horizontal)
            .rtl(true)
            .multiple(true)
            .disabled(true)
            .build();

        assert_eq!(*listbox.id(), "host-listbox");
        assert_eq!(listbox.orientation(), Orientation::Horizontal);
        assert!(listbox.is_rtl());
        assert!(listbox.is_multiple());
        assert!(listbox.is_disabled());
    }

    #[test]
    fn test_lifecycle_and_focus_delegation() {
        let mut listbox = listbox(&["A"]);
        listbox.connect();
        assert!(listbox.is_connected());
        listbox.disconnect();
        assert!(!listbox.is_connected());

        assert!(!listbox.is_focused());
        listbox.focus();
        assert!(listbox.is_focused());
        listbox.blur();
        assert!(!listbox.is_focused());
        assert_eq!(listbox.tab_index(), 0);
    }

    // =========================================================================
    // Active-Descendant Navigation
    // =========================================================================

    #[test]
    fn test_next_wraps_around_to_start() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.activate_first_item().unwrap();
        let start = listbox.active_descendant_id().clone();

        for _ in 0..3 {
            listbox.activate_next_item().unwrap();
        }
        assert_eq!(*listbox.active_descendant_id(), start);
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut listbox = listbox(&["A", "B", "C"]);
        for start in 0..3 {
            listbox.activate_item_by_index(start).unwrap();
            let before = listbox.active_descendant_id().clone();
            listbox.activate_next_item().unwrap();
            listbox.activate_previous_item().unwrap();
            assert_eq!(*listbox.active_descendant_id(), before);
        }
    }

    #[test]
    fn test_first_and_last() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.activate_last_item().unwrap();
        assert_eq!(listbox.active_descendant_index(), Some(2));
        listbox.activate_first_item().unwrap();
        assert_eq!(listbox.active_descendant_index(), Some(0));
    }

    #[test]
    fn test_navigation_does_not_skip_disabled_items() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.items_mut()[1].set_disabled(true);
        listbox.activate_first_item().unwrap();
        listbox.activate_next_item().unwrap();
        assert_eq!(listbox.active_descendant_index(), Some(1));
    }

    #[test]
    fn test_empty_sequence_navigation_fails_loudly() {
        let mut listbox = listbox(&[]);
        assert_eq!(listbox.activate_next_item(), Err(PatternError::EmptySequence));
        assert_eq!(
            listbox.activate_previous_item(),
            Err(PatternError::EmptySequence)
        );
        assert_eq!(listbox.activate_first_item(), Err(PatternError::EmptySequence));
        assert_eq!(listbox.activate_last_item(), Err(PatternError::EmptySequence));
    }

    #[test]
    fn test_activate_by_index_bounds_check() {
        let mut listbox = listbox(&["A", "B"]);
        assert_eq!(
            listbox.activate_item_by_index(2),
            Err(PatternError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_stale_active_id_is_not_found() {
        let mut listbox = listbox(&["A", "B"]);
        listbox.set_active_descendant_id(PatternId::from("cc999999"));
        assert_eq!(listbox.active_descendant_index(), None);
        assert_eq!(
            listbox.active_descendant().unwrap_err(),
            PatternError::NotFound {
                id: "cc999999".to_string()
            }
        );
        // Navigation from a stale identity restarts at the ends.
        listbox.activate_next_item().unwrap();
        assert_eq!(listbox.active_descendant_index(), Some(0));
    }

    #[test]
    fn test_index_recomputed_when_items_change() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.activate_item_by_index(2).unwrap();
        assert_eq!(listbox.active_descendant_index(), Some(2));

        // Host reorders its list; the identity keeps tracking the item.
        listbox.host_mut().items.swap(0, 2);
        assert_eq!(listbox.active_descendant_index(), Some(0));
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_single_select_is_exclusive() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.select_item(0).unwrap();
        listbox.select_item(2).unwrap();
        assert_eq!(selected_labels(&listbox), vec!["C"]);
    }

    #[test]
    fn test_multi_select_accumulates() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.set_multiple(true);
        listbox.select_item(0).unwrap();
        listbox.select_item(2).unwrap();
        assert_eq!(selected_labels(&listbox), vec!["A", "C"]);

        listbox.deselect_item(0).unwrap();
        assert_eq!(selected_labels(&listbox), vec!["C"]);
    }

    #[test]
    fn test_select_bounds_check() {
        let mut listbox = listbox(&["A"]);
        assert_eq!(
            listbox.select_item(1),
            Err(PatternError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            listbox.deselect_item(5),
            Err(PatternError::IndexOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut listbox = listbox(&["A", "B"]);
        listbox.activate_item_by_index(1).unwrap();

        listbox.toggle_active_item_selection().unwrap();
        assert!(listbox.items()[1].is_selected());
        listbox.toggle_active_item_selection().unwrap();
        assert!(!listbox.items()[1].is_selected());
    }

    #[test]
    fn test_toggle_without_active_descendant_fails() {
        let mut listbox = listbox(&["A"]);
        assert_eq!(
            listbox.toggle_active_item_selection(),
            Err(PatternError::NotFound { id: String::new() })
        );
    }

    #[test]
    fn test_selection_operations_leave_mirror_id_alone() {
        let mut listbox = listbox(&["A", "B"]);
        listbox.activate_first_item().unwrap();
        listbox.toggle_active_item_selection().unwrap();
        listbox.select_item(1).unwrap();
        assert!(listbox.selected_descendant_id().is_none());
    }

    // =========================================================================
    // Scenario: activate, toggle, re-select
    // =========================================================================

    #[test]
    fn test_single_select_walkthrough() {
        let mut listbox = listbox(&["A", "B", "C"]);

        listbox.activate_first_item().unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "A");

        listbox.activate_next_item().unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "B");

        listbox.toggle_active_item_selection().unwrap();
        assert_eq!(selected_labels(&listbox), vec!["B"]);

        listbox.activate_next_item().unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "C");

        listbox.select_item(2).unwrap();
        assert_eq!(selected_labels(&listbox), vec!["C"]);
    }

    // =========================================================================
    // Key-Scheme Dispatch
    // =========================================================================

    #[test]
    fn test_scheme_list_is_fixed_and_ordered() {
        let a = listbox(&["A"]);
        let b = listbox(&["B"]);
        assert_eq!(a.key_schemes().len(), 2);
        assert_eq!(a.key_schemes()[0].name(), "list-navigation");
        assert_eq!(a.key_schemes()[1].name(), "list-selection");
        // Every instance of the type sees the same registered list.
        let names = |schemes: &[&dyn KeyScheme<Listbox<VecHost>>]| {
            schemes.iter().map(|s| s.name()).collect::<Vec<_>>()
        };
        assert_eq!(names(a.key_schemes()), names(b.key_schemes()));
    }

    #[test]
    fn test_scheme_list_outlives_instances() {
        // The accessor returns a 'static slice, so the list stays
        // usable after the instance that produced it is dropped.
        let schemes = listbox(&["A"]).key_schemes();
        assert_eq!(schemes[0].name(), "list-navigation");
        assert_eq!(schemes[1].name(), "list-selection");
    }

    #[test]
    fn test_vertical_arrow_navigation() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.activate_first_item().unwrap();

        let response = listbox.handle_key(&KeyEvent::key_only(Key::ArrowDown)).unwrap();
        assert_eq!(response, KeyResponse::Handled);
        assert_eq!(listbox.active_descendant().unwrap().label(), "B");

        listbox.handle_key(&KeyEvent::key_only(Key::ArrowUp)).unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "A");

        // Horizontal arrows mean nothing to a vertical listbox.
        let response = listbox.handle_key(&KeyEvent::key_only(Key::ArrowRight)).unwrap();
        assert_eq!(response, KeyResponse::Ignored);
    }

    #[test]
    fn test_horizontal_navigation_respects_rtl() {
        let mut listbox = Listbox::builder(VecHost::with_labels(&["A", "B", "C"]))
            .orientation(Orientation::Horizontal)
            .build();
        listbox.activate_first_item().unwrap();

        listbox.handle_key(&KeyEvent::key_only(Key::ArrowRight)).unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "B");

        // Under RTL the arrows swap direction.
        listbox.set_rtl(true);
        listbox.handle_key(&KeyEvent::key_only(Key::ArrowLeft)).unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "C");
        listbox.handle_key(&KeyEvent::key_only(Key::ArrowRight)).unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "B");
    }

    #[test]
    fn test_home_end_keys() {
        let mut listbox = listbox(&["A", "B", "C"]);
        listbox.handle_key(&KeyEvent::key_only(Key::End)).unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "C");
        listbox.handle_key(&KeyEvent::key_only(Key::Home)).unwrap();
        assert_eq!(listbox.active_descendant().unwrap().label(), "A");
    }

    #[test]
    fn test_space_toggles_selection_via_scheme() {
        let mut listbox = listbox(&["A", "B"]);
        listbox.activate_first_item().unwrap();

        listbox.handle_key(&KeyEvent::key_only(Key::Space)).unwrap();
        assert_eq!(selected_labels(&listbox), vec!["A"]);
        listbox.handle_key(&KeyEvent::key_only(Key::Enter)).unwrap();
        assert_eq!(selected_labels(&listbox), Vec::<&str>::new());
    }

    #[test]
    fn test_ctrl_a_selects_all_in_multiple_mode() {
        let mut listbox = listbox(&["A", "B", "C"]);
        let select_all = KeyEvent::new(Key::Character('a'), KeyboardModifiers::CTRL);

        // Ignored in single-selection mode.
        assert_eq!(listbox.handle_key(&select_all).unwrap(), KeyResponse::Ignored);

        listbox.set_multiple(true);
        assert_eq!(listbox.handle_key(&select_all).unwrap(), KeyResponse::Handled);
        assert_eq!(selected_labels(&listbox), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut listbox = listbox(&["A"]);
        let response = listbox.handle_key(&KeyEvent::key_only(Key::Escape)).unwrap();
        assert_eq!(response, KeyResponse::Ignored);

        // Modified arrows fall through the navigation scheme.
        let response = listbox
            .handle_key(&KeyEvent::new(Key::ArrowDown, KeyboardModifiers::SHIFT))
            .unwrap();
        assert_eq!(response, KeyResponse::Ignored);
    }

    #[test]
    fn test_scheme_errors_propagate_through_dispatch() {
        let mut listbox = listbox(&[]);
        assert_eq!(
            listbox.handle_key(&KeyEvent::key_only(Key::ArrowDown)),
            Err(PatternError::EmptySequence)
        );
    }
}
