//! List selection key scheme.

use trellis_core::PatternResult;

use crate::behavior::{CanBeSelected, HasSelectedDescendant};
use crate::event::{Key, KeyEvent, KeyboardModifiers};

use super::{KeyResponse, KeyScheme};

/// Maps selection keys to selected-descendant operations.
///
/// - `Space` or `Enter` toggles the active item's selection.
/// - `Ctrl+A` selects every item, in multiple-selection mode only.
///
/// Runs after [`ListNavigationKeyScheme`](super::ListNavigationKeyScheme)
/// in the listbox scheme list, so navigation gets first refusal on every
/// event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSelectionKeyScheme;

impl<P> KeyScheme<P> for ListSelectionKeyScheme
where
    P: HasSelectedDescendant + ?Sized,
{
    fn name(&self) -> &'static str {
        "list-selection"
    }

    fn on_key(&self, pattern: &mut P, event: &KeyEvent) -> PatternResult<KeyResponse> {
        match (event.key, event.modifiers) {
            (Key::Space | Key::Enter, KeyboardModifiers::NONE) => {
                pattern.toggle_active_item_selection()?;
                Ok(KeyResponse::Handled)
            }
            (Key::Character('a'), KeyboardModifiers::CTRL) if pattern.is_multiple() => {
                for item in pattern.items_mut() {
                    item.set_selected(true);
                }
                Ok(KeyResponse::Handled)
            }
            _ => Ok(KeyResponse::Ignored),
        }
    }
}
