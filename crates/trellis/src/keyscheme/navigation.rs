//! List navigation key scheme.

use trellis_core::PatternResult;

use crate::behavior::{AffectedByRtl, HasActiveDescendant, HasOrientation, Orientation};
use crate::event::{Key, KeyEvent};

use super::{KeyResponse, KeyScheme};

/// Maps navigation keys to active-descendant movement.
///
/// - Vertical orientation: `ArrowDown` / `ArrowUp` move next / previous.
/// - Horizontal orientation: `ArrowRight` / `ArrowLeft` move next /
///   previous, swapped when the text direction is right-to-left.
/// - `Home` / `End` jump to the first / last item.
///
/// Events carrying modifiers are ignored so that modified arrows stay
/// available to other schemes. Navigation wraps at both ends and does
/// not skip disabled items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListNavigationKeyScheme;

impl ListNavigationKeyScheme {
    fn arrows_for<P>(pattern: &P) -> (Key, Key)
    where
        P: HasOrientation + AffectedByRtl + ?Sized,
    {
        match pattern.orientation() {
            Orientation::Vertical => (Key::ArrowDown, Key::ArrowUp),
            Orientation::Horizontal if pattern.is_rtl() => (Key::ArrowLeft, Key::ArrowRight),
            Orientation::Horizontal => (Key::ArrowRight, Key::ArrowLeft),
        }
    }
}

impl<P> KeyScheme<P> for ListNavigationKeyScheme
where
    P: HasActiveDescendant + HasOrientation + AffectedByRtl + ?Sized,
{
    fn name(&self) -> &'static str {
        "list-navigation"
    }

    fn on_key(&self, pattern: &mut P, event: &KeyEvent) -> PatternResult<KeyResponse> {
        if !event.modifiers.is_empty() {
            return Ok(KeyResponse::Ignored);
        }

        let (next, previous) = Self::arrows_for(pattern);
        if event.key == next {
            pattern.activate_next_item()?;
        } else if event.key == previous {
            pattern.activate_previous_item()?;
        } else if event.key == Key::Home {
            pattern.activate_first_item()?;
        } else if event.key == Key::End {
            pattern.activate_last_item()?;
        } else {
            return Ok(KeyResponse::Ignored);
        }
        Ok(KeyResponse::Handled)
    }
}
