//! Card-stack state machine: pointer, labels, gesture and key dispatch.

use core::fmt;

use log::{debug, warn};

use crate::{
    flash::Transient,
    gesture::{DEFAULT_SWIPE_THRESHOLD_PX, GestureTracker, swipe_decision},
    input::{
        InputEvent, InputProvider,
        keymap::{DeckAction, KeyBindingMap, KeyResolution},
    },
    labels::{Categories, CategoryError, IndexOutOfRange, Label, LabelStore},
    render::{
        AnimationFrame, AnimationKind, AnimationSpec, CardSlot, DeckRenderer, EXHAUSTED_MESSAGE,
        ExitDirection, LabelFlash, Screen, Window,
    },
};

pub const DEFAULT_WINDOW_SIZE: usize = 10;
const DEFAULT_FLASH_MS: u64 = 1_000;
const DEFAULT_EXIT_ANIM_MS: u16 = 220;
const ANIM_RETURN_MS: u16 = 160;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Whether an event was handled by the deck. Hosts block default handling of
/// consumed events only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StackConfig {
    pub item_count: usize,
    pub window_size: usize,
    pub categories: Categories,
    pub swipe_threshold_px: f32,
    /// How long the "just labelled" flash stays up.
    pub flash_ms: u64,
    pub exit_anim_ms: u16,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            window_size: DEFAULT_WINDOW_SIZE,
            categories: Categories::default(),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            flash_ms: DEFAULT_FLASH_MS,
            exit_anim_ms: DEFAULT_EXIT_ANIM_MS,
        }
    }
}

impl StackConfig {
    pub fn new(item_count: usize, categories: Categories) -> Self {
        Self {
            item_count,
            categories,
            ..Self::default()
        }
    }

    /// Builds a config from raw category names, as `[left, right]`.
    pub fn with_names(item_count: usize, names: [&str; 2]) -> Result<Self, ConfigError> {
        let [left, right] = names;
        Ok(Self::new(item_count, Categories::new(left, right)?))
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_swipe_threshold_px(mut self, swipe_threshold_px: f32) -> Self {
        self.swipe_threshold_px = swipe_threshold_px;
        self
    }

    pub fn with_flash_ms(mut self, flash_ms: u64) -> Self {
        self.flash_ms = flash_ms;
        self
    }

    pub fn with_exit_anim_ms(mut self, exit_anim_ms: u16) -> Self {
        self.exit_anim_ms = exit_anim_ms;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    ZeroWindow,
    InvalidThreshold,
    Category(CategoryError),
}

impl From<CategoryError> for ConfigError {
    fn from(err: CategoryError) -> Self {
        Self::Category(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindow => f.write_str("window size must be at least 1"),
            Self::InvalidThreshold => {
                f.write_str("swipe threshold must be a finite, non-negative distance")
            }
            Self::Category(err) => write!(f, "invalid category: {err}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Deck,
    Fault {
        line1: &'static str,
        line2: &'static str,
    },
}

/// Swipe-labelling controller over `item_count` cards.
///
/// Owns the pointer, the label store and the input port for its whole
/// lifetime. Every pointer move bumps `generation`; a drag remembers the
/// generation it started under and its release is dropped if a key or button
/// moved the pointer in the meantime.
pub struct CardStack<IN>
where
    IN: InputProvider,
{
    input: IN,
    config: StackConfig,
    labels: LabelStore,
    current: usize,
    generation: u64,
    gesture: GestureTracker,
    keymap: KeyBindingMap,
    flash: Transient<LabelFlash>,
    ui: UiState,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
}

include!("runtime.rs");
include!("view.rs");
include!("input.rs");
