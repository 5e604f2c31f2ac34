//! Composable behavior patterns for accessible UI widgets.
//!
//! Trellis implements widget behavior (active-descendant tracking,
//! single and multiple selection, orientation- and text-direction-aware
//! keyboard navigation) as small, independently composable capability
//! units, decoupled from any rendering framework. A composite pattern
//! such as [`pattern::Listbox`] assembles the units into one controller;
//! the host adapter supplies the concrete item list and focus
//! primitives, and translates its framework's keyboard events into
//! [`event::KeyEvent`] values.
//!
//! What Trellis deliberately does **not** do: rendering, DOM/native
//! event binding, framework component lifecycles, styling, and ARIA
//! attribute emission. Those belong to the host adapter.
//!
//! # Architecture
//!
//! - [`behavior`]: capability contracts, unit states, and the two
//!   dependent capabilities (active descendant, selected descendant).
//!   Prerequisites between capabilities are supertrait bounds, checked
//!   at compile time.
//! - [`pattern`]: composite controllers assembled from the units, plus
//!   the [`OptionItem`](pattern::OptionItem) item type.
//! - [`keyscheme`]: swappable mappings from key input to behavior
//!   operations, registered as one fixed ordered list per composite
//!   type.
//! - [`event`]: framework-agnostic key input types.
//!
//! # Example
//!
//! ```
//! use trellis::event::{Key, KeyEvent};
//! use trellis::pattern::{Listbox, OptionItem};
//! use trellis::prelude::*;
//!
//! // A host adapter owns the items and the focus primitives.
//! struct Host {
//!     items: Vec<OptionItem>,
//!     focused: bool,
//! }
//!
//! impl HasItems for Host {
//!     type Item = OptionItem;
//!     fn items(&self) -> &[OptionItem] { &self.items }
//!     fn items_mut(&mut self) -> &mut [OptionItem] { &mut self.items }
//! }
//!
//! impl CanBeFocused for Host {
//!     fn is_focused(&self) -> bool { self.focused }
//!     fn tab_index(&self) -> i32 { 0 }
//!     fn focus(&mut self) { self.focused = true; }
//!     fn blur(&mut self) { self.focused = false; }
//! }
//!
//! # fn main() -> trellis_core::PatternResult<()> {
//! let host = Host {
//!     items: vec![OptionItem::new("Red"), OptionItem::new("Green")],
//!     focused: false,
//! };
//! let mut listbox = Listbox::new(host);
//!
//! listbox.activate_first_item()?;
//! listbox.handle_key(&KeyEvent::key_only(Key::ArrowDown))?;
//! listbox.handle_key(&KeyEvent::key_only(Key::Space))?;
//! assert!(listbox.items()[1].is_selected());
//! # Ok(())
//! # }
//! ```

pub mod behavior;
pub mod event;
pub mod keyscheme;
pub mod pattern;

pub use trellis_core::{IdGenerator, PatternError, PatternId, PatternResult};

/// Convenience re-exports for host adapters.
pub mod prelude {
    pub use crate::behavior::{
        AffectedByRtl, CanBeDisabled, CanBeFocused, CanBeSelected, HasActiveDescendant, HasId,
        HasItems, HasLifecycle, HasOrientation, HasSelectedDescendant, Orientation,
    };
    pub use crate::event::{Key, KeyEvent, KeyboardModifiers};
    pub use crate::keyscheme::{dispatch_key, HasKeySchemes, KeyResponse, KeyScheme};
    pub use crate::pattern::{Listbox, ListboxBuilder, ListboxHost, ListboxPattern, OptionItem};
    pub use trellis_core::{PatternError, PatternId, PatternResult};
}
