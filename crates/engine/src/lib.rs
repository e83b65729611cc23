//! Tick driver and session plumbing around the core engine.
//!
//! The core never looks at a clock. This crate owns the pieces that do:
//!
//! - [`GravityClock`]: turns elapsed frame time into periodic down-moves
//! - [`Session`]: holds the current game, its random source and the suspend
//!   flag, and funnels every input and gravity tick through one place

pub mod gravity;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use gravity::GravityClock;
pub use session::Session;
