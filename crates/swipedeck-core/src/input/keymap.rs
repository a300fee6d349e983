//! Arrow-key bindings for deck actions.

use super::Key;
use crate::labels::Side;

/// Controller action produced by discrete input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeckAction {
    /// Label the front card with a category and advance.
    Choose(Side),
    /// Return to the previous card without touching its label.
    StepBack,
    /// Clear the front card's label and advance.
    Skip,
}

/// Outcome of resolving one key-down event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyResolution {
    Action(DeckAction),
    /// Bound key held down: consumed, but produces nothing.
    Suppressed,
    /// Unbound key, left for the host to handle.
    Passthrough,
}

impl KeyResolution {
    /// Whether the host should block its default handling of the key.
    pub const fn intercepts(self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

/// Fixed arrow layout: left/right choose, up steps back, down skips.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KeyBindingMap;

impl KeyBindingMap {
    pub const fn new() -> Self {
        Self
    }

    pub const fn action_for(&self, key: Key) -> Option<DeckAction> {
        match key {
            Key::ArrowLeft => Some(DeckAction::Choose(Side::Left)),
            Key::ArrowRight => Some(DeckAction::Choose(Side::Right)),
            Key::ArrowUp => Some(DeckAction::StepBack),
            Key::ArrowDown => Some(DeckAction::Skip),
            Key::Other => None,
        }
    }

    /// Only the leading edge of a press maps to an action.
    pub const fn resolve(&self, key: Key, repeat: bool) -> KeyResolution {
        match self.action_for(key) {
            None => KeyResolution::Passthrough,
            Some(_) if repeat => KeyResolution::Suppressed,
            Some(action) => KeyResolution::Action(action),
        }
    }
}
