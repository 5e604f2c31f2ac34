//! Key schemes: swappable mappings from key input to behavior operations.
//!
//! A key scheme is stateless. It looks at a [`KeyEvent`], and either
//! translates it into capability operations on the pattern and reports
//! [`KeyResponse::Handled`], or reports [`KeyResponse::Ignored`] so the
//! next scheme gets a look.
//!
//! Each composite type owns one fixed, ordered list of schemes, shared
//! by reference across all instances of that type and exposed through
//! [`HasKeySchemes`]. Evaluation order is significant: [`dispatch_key`]
//! walks the list in order and the first scheme that handles the event
//! wins.

use trellis_core::PatternResult;

use crate::event::KeyEvent;

mod navigation;
mod selection;

pub use navigation::ListNavigationKeyScheme;
pub use selection::ListSelectionKeyScheme;

/// Outcome of offering a key event to a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The scheme consumed the event; stop dispatching.
    Handled,
    /// The scheme does not map this event; offer it to the next scheme.
    Ignored,
}

/// A stateless mapping from key events to operations on a pattern.
///
/// Schemes are generic over the pattern they drive and bound only by the
/// capabilities they actually use, so one scheme serves every composite
/// that carries those capabilities.
pub trait KeyScheme<P: ?Sized> {
    /// A stable name for logging and debugging.
    fn name(&self) -> &'static str;

    /// Offer a key event to this scheme.
    ///
    /// # Errors
    ///
    /// Behavior operations the scheme invokes can fail (empty item
    /// sequence, stale active descendant); those errors propagate to the
    /// dispatching host untouched.
    fn on_key(&self, pattern: &mut P, event: &KeyEvent) -> PatternResult<KeyResponse>;
}

/// The capability of owning a registered key-scheme list.
///
/// The returned slice is `'static`: one fixed list per composite type,
/// populated at startup, immutable, and shared by every instance. The
/// scheme objects mention `Self`, so the composite type itself must be
/// `'static` (it may not borrow from the host's stack).
pub trait HasKeySchemes: Sized + 'static {
    /// The ordered scheme list for this composite type.
    fn key_schemes(&self) -> &'static [&'static dyn KeyScheme<Self>];
}

/// Offer a key event to a pattern's registered schemes, in order.
///
/// Returns [`KeyResponse::Handled`] as soon as one scheme consumes the
/// event, [`KeyResponse::Ignored`] when none does.
///
/// # Errors
///
/// The first scheme error aborts dispatch and propagates.
pub fn dispatch_key<P: HasKeySchemes>(
    pattern: &mut P,
    event: &KeyEvent,
) -> PatternResult<KeyResponse> {
    for scheme in pattern.key_schemes() {
        if scheme.on_key(pattern, event)? == KeyResponse::Handled {
            tracing::trace!(
                target: "trellis::keyscheme",
                scheme = scheme.name(),
                key = ?event.key,
                "key handled"
            );
            return Ok(KeyResponse::Handled);
        }
    }
    Ok(KeyResponse::Ignored)
}
