//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. There is no
//! key-repeat logic here: every press is one action, and the terminal's own
//! auto-repeat is left to the caller to accept or ignore.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
