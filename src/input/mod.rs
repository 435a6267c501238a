//! Input module - terminal key handling.

pub mod map;

pub use map::{handle_key_event, should_quit, UiAction};
