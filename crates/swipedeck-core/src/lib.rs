//! Card-stack controller for binary swipe labelling.
//!
//! The crate turns gesture, key and button input into committed labels over a
//! fixed-size item sequence, and projects the current state into a bounded
//! window of cards for a host renderer.

#![no_std]

extern crate alloc;

pub mod deck;
pub mod flash;
pub mod gesture;
pub mod input;
pub mod labels;
pub mod render;
