//! The falling piece: a shape plus the board position of its bounding box.

use crate::shapes::{Shape, ShapeCells};

/// Top-left corner of a piece's bounding box in board coordinates.
///
/// `y` may be negative while part of the bounding box is above the visible top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Active falling piece
///
/// Pieces are values: moving or rotating produces a new `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub position: Position,
}

impl Piece {
    pub fn new(shape: Shape, position: Position) -> Self {
        Self { shape, position }
    }

    /// Create a piece at the canonical spawn position for a board `board_width` wide.
    ///
    /// The bounding box is centred horizontally (rounding left) and the first
    /// occupied mask row sits on board row 0.
    pub fn spawn(shape: Shape, board_width: u16) -> Self {
        let x = (board_width as i32 - shape.size()) / 2;
        let y = -shape.top_row();
        Self::new(shape, Position::new(x, y))
    }

    /// Same shape, moved by `(dx, dy)`
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }

    /// Same position, different shape
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Occupied cells in absolute board coordinates
    pub fn cells(&self) -> ShapeCells {
        self.shape
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.position.x + dx, self.position.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn spawn_centres_and_top_aligns() {
        let t = Piece::spawn(get_shape(PieceKind::T), 10);
        assert_eq!(t.position, Position::new(3, 0));

        // The I mask starts with an empty row, so the box starts one row above the top.
        let i = Piece::spawn(get_shape(PieceKind::I), 10);
        assert_eq!(i.position, Position::new(3, -1));
        assert!(i.cells().iter().all(|&(_, y)| y == 0));

        let o = Piece::spawn(get_shape(PieceKind::O), 10);
        assert_eq!(o.position, Position::new(4, 0));
    }

    #[test]
    fn cells_are_translated() {
        let piece = Piece::new(get_shape(PieceKind::O), Position::new(5, 7));
        assert_eq!(piece.cells().as_slice(), &[(5, 7), (6, 7), (5, 8), (6, 8)]);
    }

    #[test]
    fn shifted_keeps_original() {
        let piece = Piece::new(get_shape(PieceKind::J), Position::new(2, 2));
        let moved = piece.shifted(-1, 1);
        assert_eq!(piece.position, Position::new(2, 2));
        assert_eq!(moved.position, Position::new(1, 3));
        assert_eq!(moved.shape, piece.shape);
    }
}
