//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping is
//! context-free; the session decides what an action means on the current screen.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
