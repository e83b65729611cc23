//! Terminal renderer for the falling-block game.
//!
//! Rendering is split in two:
//!
//! - [`GameView`] turns a game into a [`Canvas`] of styled glyphs (pure, testable)
//! - [`TerminalRenderer`] flushes canvases to the terminal through crossterm
//!
//! Neither side changes the game; they only read it.

pub mod canvas;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{Canvas, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
