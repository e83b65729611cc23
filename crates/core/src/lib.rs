//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the whole falling-block engine: board, shapes, collision,
//! locking, line clears, scoring and next-piece selection. It has **no
//! dependencies** on rendering, input, timing or I/O:
//!
//! - **Deterministic**: randomness is injected, so a seeded source replays a game exactly
//! - **Value based**: every transition consumes a [`Game`] and returns its replacement
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: canonical piece masks, clockwise rotation, random selection
//! - [`board`]: fixed-size occupancy grid, merging and row clearing
//! - [`collision`]: the `can_place` legality predicate
//! - [`piece`]: falling piece value (shape + position)
//! - [`game`]: aggregate game state and the move/rotate/drop transitions
//! - [`rng`]: injectable random source and a seedable LCG
//! - [`scoring`]: points per lock from the number of cleared rows
//!
//! # Rules
//!
//! - Pieces are drawn uniformly at random from the seven standard tetrominoes
//! - Rotation is a plain 90° clockwise mask rotation, with no wall kicks
//! - A piece locks on the first `move_down` that cannot move it
//! - All full rows clear at once; score follows the classic 40/100/300/1200 table
//! - The game ends when a new piece cannot spawn or a piece locks above the top
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, SimpleRng};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut game = Game::new(&mut rng);
//!
//! game = game.move_left();
//! game = game.move_rotate();
//! game = game.move_down(&mut rng);
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod collision;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowClear};
pub use collision::{can_place, piece_fits};
pub use game::Game;
pub use piece::{Piece, Position};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::line_clear_score;
pub use shapes::{get_shape, pick_random_shape, Shape, SHAPES};
