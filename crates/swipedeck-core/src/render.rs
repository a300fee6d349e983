//! Deck view models and animation metadata.

use alloc::vec::Vec;

use crate::labels::{Categories, Label, LabelTally, Side};

/// Shown when the deck has no cards left.
pub const EXHAUSTED_MESSAGE: &str = "No more items";

/// Direction in which the previous card leaves the stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExitDirection {
    Left,
    Right,
    Down,
}

impl ExitDirection {
    pub const fn from_label(label: Label) -> Self {
        match label {
            Label::Category(Side::Left) => Self::Left,
            Label::Category(Side::Right) => Self::Right,
            Label::Unlabeled => Self::Down,
        }
    }
}

/// One materialized card, listed in back-to-front paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSlot {
    pub index: usize,
    /// 0 paints first (farthest back).
    pub paint_order: usize,
    /// The live card the operator is deciding on.
    pub is_front: bool,
    /// Set only on the trailing slot of the card being dismissed.
    pub exit_direction: Option<ExitDirection>,
    /// Untransitioned horizontal translation of the front card during a drag.
    pub live_offset: Option<f32>,
}

/// Upcoming cards plus the dismissed one, at most `window_size + 1` slots.
pub type Window = Vec<CardSlot>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    ExitLeft,
    ExitRight,
    ExitDown,
    Return,
}

impl From<ExitDirection> for AnimationKind {
    fn from(direction: ExitDirection) -> Self {
        match direction {
            ExitDirection::Left => Self::ExitLeft,
            ExitDirection::Right => Self::ExitRight,
            ExitDirection::Down => Self::ExitDown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Transient confirmation of the most recent commit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LabelFlash {
    pub index: usize,
    pub label: Label,
}

/// App-level view model consumed by the host renderer.
#[derive(Debug)]
pub enum Screen<'a> {
    Deck {
        slots: &'a [CardSlot],
        categories: &'a Categories,
        /// Index of the front card.
        position: usize,
        total: usize,
        tally: LabelTally,
        flash: Option<LabelFlash>,
        animation: Option<AnimationFrame>,
    },
    /// No visible cards remain; the dismissed card may still be animating out.
    Exhausted {
        message: &'static str,
        last: Option<CardSlot>,
        total: usize,
        tally: LabelTally,
        flash: Option<LabelFlash>,
        animation: Option<AnimationFrame>,
    },
    Fault {
        line1: &'static str,
        line2: &'static str,
    },
}

/// Host-side drawing backend.
pub trait DeckRenderer {
    type Error;

    fn render(&mut self, screen: &Screen<'_>) -> Result<(), Self::Error>;
}
