//! Framework-agnostic key input types.
//!
//! Trellis never binds to a windowing system or DOM. The host adapter
//! translates its framework's native keyboard events into [`KeyEvent`]
//! values and feeds them to a pattern's key schemes.
//!
//! ```ignore
//! use trellis::event::{Key, KeyEvent, KeyboardModifiers};
//!
//! // In the host's key handler:
//! let event = KeyEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
//! listbox.handle_key(&event)?;
//! ```

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Returns `true` if no modifier is held.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A logical key, reduced to the set behavior patterns dispatch on.
///
/// Printable input arrives as [`Key::Character`] with the lowercased
/// character; everything a scheme does not recognize maps to
/// [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter/Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// A printable character key.
    Character(char),
    /// A key the host could not classify.
    Unknown,
}

/// A key press delivered to a pattern's key schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            key,
            modifiers,
            is_repeat: false,
        }
    }

    /// Create a key event with no modifiers.
    pub fn key_only(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// Mark this event as a key repeat.
    pub fn with_repeat(mut self) -> Self {
        self.is_repeat = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_constants() {
        assert!(KeyboardModifiers::NONE.is_empty());
        assert!(!KeyboardModifiers::CTRL.is_empty());
        assert!(KeyboardModifiers::CTRL.control);
        assert!(!KeyboardModifiers::CTRL.shift);
    }

    #[test]
    fn test_key_event_constructors() {
        let event = KeyEvent::key_only(Key::ArrowDown);
        assert_eq!(event.key, Key::ArrowDown);
        assert!(event.modifiers.is_empty());
        assert!(!event.is_repeat);
        assert!(event.with_repeat().is_repeat);
    }
}
