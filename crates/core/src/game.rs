//! Game state module - the aggregate record and its transitions
//!
//! A [`Game`] is a value. Each transition consumes the current game and returns
//! its replacement; an illegal move hands back the same game untouched. The
//! caller keeps whatever comes back and feeds it to the next transition, so
//! transitions for one game are serialised by construction.
//!
//! Lifecycle of the active piece:
//!
//! 1. spawned at the top centre from the queued `next_shape`,
//! 2. falls via `move_down` (gravity ticks or player input),
//! 3. locks when it can no longer fall: merged into the board, full rows are
//!    cleared, the score grows, and the next piece spawns.
//!
//! If the freshly spawned piece does not fit, or a piece locks while part of it
//! is still above the visible top, the game moves to [`GameStatus::GameOver`].
//! A finished game has no active piece and ignores every transition.

use crate::board::{Board, RowClear};
use crate::collision::piece_fits;
use crate::piece::Piece;
use crate::rng::RandomSource;
use crate::scoring::line_clear_score;
use crate::shapes::{pick_random_shape, Shape};
use crate::types::{ConfigError, GameAction, GameConfig, GameStatus};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    /// `None` only once the game is over.
    piece: Option<Piece>,
    next_shape: Shape,
    score: u32,
    lines: u32,
    status: GameStatus,
}

impl Game {
    /// Create the initial game on a standard 10x20 board.
    pub fn new(rng: &mut impl RandomSource) -> Self {
        Self::start_on(Board::standard(), rng)
    }

    /// Create the initial game for a custom configuration.
    pub fn with_config(
        config: &GameConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let board = Board::new(config.width, config.height)?;
        Ok(Self::start_on(board, rng))
    }

    /// Start a game on `board` as given, drawing the first and next shapes.
    pub fn start_on(board: Board, rng: &mut impl RandomSource) -> Self {
        let first = pick_random_shape(rng);
        let next = pick_random_shape(rng);
        Self::spawned(board, first, next, 0, 0)
    }

    /// Assemble a game from explicit parts, e.g. to set up a scenario.
    ///
    /// Panics if `piece` does not fit on `board`.
    pub fn from_parts(board: Board, piece: Piece, next_shape: Shape) -> Self {
        assert!(
            piece_fits(&board, &piece),
            "from_parts: piece at {:?} does not fit the board",
            piece.position
        );
        Self {
            board,
            piece: Some(piece),
            next_shape,
            score: 0,
            lines: 0,
            status: GameStatus::Playing,
        }
    }

    /// Spawn `shape` on `board`, ending the game if it does not fit.
    fn spawned(board: Board, shape: Shape, next_shape: Shape, score: u32, lines: u32) -> Self {
        let piece = Piece::spawn(shape, board.width());
        let (piece, status) = if piece_fits(&board, &piece) {
            (Some(piece), GameStatus::Playing)
        } else {
            (None, GameStatus::GameOver)
        };

        Self {
            board,
            piece,
            next_shape,
            score,
            lines,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece, absent once the game is over
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn next_shape(&self) -> &Shape {
        &self.next_shape
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared so far
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Move the piece one column left if it fits.
    pub fn move_left(self) -> Self {
        self.try_replace(|piece| piece.shifted(-1, 0))
    }

    /// Move the piece one column right if it fits.
    pub fn move_right(self) -> Self {
        self.try_replace(|piece| piece.shifted(1, 0))
    }

    /// Rotate the piece 90° clockwise in place if it fits. No wall kicks.
    pub fn move_rotate(self) -> Self {
        self.try_replace(|piece| piece.with_shape(piece.shape.rotated_cw()))
    }

    /// Move the piece one row down, or lock it if it has landed.
    ///
    /// `rng` is only consulted when a lock happens, to queue the next shape.
    pub fn move_down(mut self, rng: &mut impl RandomSource) -> Self {
        let Some(piece) = self.piece else {
            return self;
        };

        let candidate = piece.shifted(0, 1);
        if piece_fits(&self.board, &candidate) {
            self.piece = Some(candidate);
            return self;
        }

        self.lock(piece, rng)
    }

    /// Dispatch a game action.
    ///
    /// `Pause` and `Restart` belong to whoever owns the game and leave it as is.
    pub fn apply(self, action: GameAction, rng: &mut impl RandomSource) -> Self {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.move_rotate(),
            GameAction::MoveDown => self.move_down(rng),
            GameAction::Pause | GameAction::Restart => self,
        }
    }

    /// Swap in `f(piece)` when the result fits, otherwise keep the game as is.
    fn try_replace(mut self, f: impl FnOnce(&Piece) -> Piece) -> Self {
        let Some(piece) = self.piece else {
            return self;
        };

        let candidate = f(&piece);
        if piece_fits(&self.board, &candidate) {
            self.piece = Some(candidate);
        }
        self
    }

    /// Merge the landed piece, clear rows, score, and spawn the queued shape.
    fn lock(self, piece: Piece, rng: &mut impl RandomSource) -> Self {
        // Cells above the top cannot be stored on the board: lock out.
        if piece.cells().iter().any(|&(_, y)| y < 0) {
            return Self {
                piece: None,
                status: GameStatus::GameOver,
                ..self
            };
        }

        let RowClear { board, cleared } = self.board.merge_piece(&piece).clear_full_rows();
        let score = self.score.saturating_add(line_clear_score(cleared));
        let lines = self.lines.saturating_add(cleared as u32);
        let next_shape = pick_random_shape(rng);

        Self::spawned(board, self.next_shape, next_shape, score, lines)
    }
}
