//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data shared by the engine, the tick driver, the
//! input map and the renderer. Nothing here performs I/O or owns game logic.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Coordinates are `(x, y)` with
//! `x` growing to the right and `y` growing downwards; row 0 is the visible top.
//! Other sizes are available through [`GameConfig`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | Elapsed time between forced down-moves |
//! | `TICK_MS` | 16 | Frame cadence of the terminal runner (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let cell = Cell::Filled(PieceKind::T);
//! assert!(cell.is_filled());
//! assert!(!Cell::Empty.is_filled());
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Default renderer cell width, in terminal columns per board cell.
///
/// Two columns per cell compensates for the typical terminal glyph aspect ratio.
pub const CELL_SIZE: u16 = 2;

/// Default gravity interval (one forced down-move every 500ms)
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// Frame cadence of the terminal runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Largest side of any catalog shape mask.
///
/// Boards smaller than this in either dimension are rejected by configuration.
pub const MAX_SHAPE_SIZE: u16 = 4;

/// The seven tetromino piece kinds
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All piece kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Upper-case letter shown next to the NEXT preview
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.letter(), "I");
    /// assert_eq!(PieceKind::Z.letter(), "Z");
    /// ```
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// A cell on the game board
///
/// Filled cells remember the kind of piece that was locked into them so the
/// renderer can colour them; the engine itself only cares about occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceKind),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(*kind),
        }
    }
}

/// Discrete inputs understood by the game
///
/// The first four are engine transitions. `Pause` and `Restart` are handled by
/// the session that owns the game and never change a `Game` value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Move piece one row down, locking it if it has landed
    MoveDown,
    /// Toggle the suspend flag
    Pause,
    /// Throw the current game away and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "movedown" => Some(GameAction::MoveDown),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::MoveDown => "moveDown",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// A piece is falling and transitions apply.
    #[default]
    Playing,
    /// Terminal: a new piece could not be placed. Every transition is a no-op.
    GameOver,
}

/// Line clear scoring table (classic, no level multiplier)
///
/// Index is the number of rows removed by a single lock:
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::MoveDown,
            GameAction::Pause,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn cell_reports_kind() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::Empty.kind(), None);
        assert_eq!(Cell::Filled(PieceKind::L).kind(), Some(PieceKind::L));
    }

    #[test]
    fn line_scores_strictly_increase() {
        assert!(LINE_SCORES.windows(2).all(|w| w[0] < w[1]));
    }
}
