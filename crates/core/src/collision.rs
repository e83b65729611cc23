//! Collision and bounds checking
//!
//! [`can_place`] is the only legality test in the engine. Every move, rotation,
//! spawn and lock decision reduces to one or more calls to it.

use crate::board::Board;
use crate::piece::{Piece, Position};
use crate::shapes::Shape;

/// Whether a single board coordinate stops a piece cell from occupying it.
///
/// - columns left of 0 or at/after `width` block (side walls),
/// - rows at/after `height` block (floor),
/// - rows above the top (`y < 0`) never block,
/// - otherwise the cell blocks when it is filled.
pub fn blocks(board: &Board, x: i32, y: i32) -> bool {
    if x < 0 || x >= board.width() as i32 {
        return true;
    }
    if y >= board.height() as i32 {
        return true;
    }
    if y < 0 {
        return false;
    }
    board.is_filled(x, y)
}

/// Whether `shape` fits on `board` with its bounding box at `position`.
pub fn can_place(board: &Board, shape: &Shape, position: Position) -> bool {
    shape
        .cells()
        .iter()
        .all(|&(dx, dy)| !blocks(board, position.x + dx, position.y + dy))
}

/// [`can_place`] for an existing piece value.
pub fn piece_fits(board: &Board, piece: &Piece) -> bool {
    can_place(board, &piece.shape, piece.position)
}
