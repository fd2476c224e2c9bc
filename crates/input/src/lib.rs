//! Terminal input module.
//!
//! Intentionally independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]. One key press resolves one
//! turn; the board rejects input on its own while a turn settles, so no
//! repeat handling lives here.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
