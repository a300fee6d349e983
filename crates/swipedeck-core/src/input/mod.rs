//! Input abstraction layer.
//!
//! Hosts translate their native pointer, touch, keyboard and button events
//! into [`InputEvent`]s and hand them to the deck through an
//! [`InputProvider`] owned by the controller.

pub mod keymap;
pub mod mock;
pub mod queue;

use crate::labels::Side;

/// Keys the deck cares about. Everything else arrives as [`Key::Other`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Normalized events consumed by the deck.
///
/// Gesture coordinates are horizontal screen positions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    GestureStart { x: f32 },
    GestureMove { x: f32 },
    GestureEnd,
    GestureCancel,
    KeyDown { key: Key, repeat: bool },
    /// On-screen category button.
    Choose(Side),
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
