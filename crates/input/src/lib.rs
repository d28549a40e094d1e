//! Terminal input module (facade-facing).
//!
//! Maps `crossterm` key and mouse events into the symbolic vocabulary of
//! [`crate::types`] and tracks which keys are held down, including on
//! terminals without key-release events.

pub mod map;
pub mod tracker;

pub use gridgame_types as types;

pub use map::{
    button_from_mouse, is_quit, key_from_code, key_from_event, raw_from_mouse, translate_key,
    translate_key_at,
};
pub use tracker::KeyTracker;
