//! GameView: maps a `core::Game` into a terminal canvas.
//!
//! This module is pure (no I/O). It reads the game and never changes it.

use crossterm::style::Color;

use crate::canvas::{Canvas, Style};
use crate::core::{Game, Shape};
use crate::types::{Cell, PieceKind, CELL_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Color = Color::Rgb { r: 30, g: 30, b: 40 };

/// Draws the board, the falling piece, and a side panel with score and next shape.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(CELL_SIZE)
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing canvas, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, paused: bool, viewport: Viewport, canvas: &mut Canvas) {
        canvas.reset(viewport.width, viewport.height);

        let board = game.board();
        // Saturate so oversized boards clip at the canvas edge.
        let frame_w = board.width().saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = board.height().saturating_add(2);
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        let origin = (left, top);
        self.draw_border(canvas, left, top, frame_w, frame_h);

        let empty = Style::new(Color::Rgb { r: 90, g: 90, b: 100 }, BOARD_BG);
        for y in 0..board.height() {
            for x in 0..board.width() {
                match board.get(x as i32, y as i32) {
                    Some(Cell::Filled(kind)) => self.draw_block(canvas, origin, x, y, kind),
                    _ => self.fill_cell(canvas, origin, x, y, '·', empty),
                }
            }
        }

        if let Some(piece) = game.piece() {
            for (x, y) in piece.cells() {
                // Cells above the top are not drawn.
                if board.contains(x, y) {
                    self.draw_block(canvas, origin, x as u16, y as u16, piece.shape.kind());
                }
            }
        }

        self.draw_panel(canvas, game, left.saturating_add(frame_w).saturating_add(2), top);

        if game.is_game_over() {
            self.draw_banner(canvas, origin, frame_w, frame_h, "GAME OVER");
        } else if paused {
            self.draw_banner(canvas, origin, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new canvas.
    pub fn render(&self, game: &Game, paused: bool, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(game, paused, viewport, &mut canvas);
        canvas
    }

    fn draw_border(&self, canvas: &mut Canvas, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Color::Grey, Color::Black);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        canvas.put(x, y, '┌', style);
        canvas.put(right, y, '┐', style);
        canvas.put(x, bottom, '└', style);
        canvas.put(right, bottom, '┘', style);
        for cx in x + 1..right {
            canvas.put(cx, y, '─', style);
            canvas.put(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            canvas.put(x, cy, '│', style);
            canvas.put(right, cy, '│', style);
        }
    }

    fn draw_block(
        &self,
        canvas: &mut Canvas,
        origin: (u16, u16),
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style::new(piece_color(kind), BOARD_BG).bold();
        self.fill_cell(canvas, origin, x, y, '█', style);
    }

    /// Paint board cell `(x, y)`; `origin` is the top-left corner of the border.
    fn fill_cell(
        &self,
        canvas: &mut Canvas,
        origin: (u16, u16),
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let (left, top) = origin;
        let cx = left.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let cy = top.saturating_add(1).saturating_add(y);
        canvas.fill(cx, cy, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, canvas: &mut Canvas, game: &Game, x: u16, top: u16) {
        let label = Style::new(Color::White, Color::Black).bold();
        let value = Style::new(Color::Grey, Color::Black);

        canvas.put_str(x, top, "SCORE", label);
        canvas.put_str(x, top + 1, &game.score().to_string(), value);
        canvas.put_str(x, top + 3, "LINES", label);
        canvas.put_str(x, top + 4, &game.lines().to_string(), value);
        canvas.put_str(x, top + 6, "NEXT", label);
        let kind = game.next_shape().kind();
        canvas.put_str(x.saturating_add(5), top + 6, kind.letter(), value);
        self.draw_preview(canvas, game.next_shape(), x, top + 7);
    }

    /// Next shape as a small mask, skipping its leading empty rows.
    fn draw_preview(&self, canvas: &mut Canvas, shape: &Shape, x: u16, y: u16) {
        let style = Style::new(piece_color(shape.kind()), Color::Black).bold();
        let skip = shape.top_row();
        for (dx, dy) in shape.cells() {
            let px = x.saturating_add((dx as u16).saturating_mul(self.cell_w));
            let py = y + (dy - skip) as u16;
            canvas.fill(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_banner(&self, canvas: &mut Canvas, origin: (u16, u16), w: u16, h: u16, text: &str) {
        let (left, top) = origin;
        let style = Style::new(Color::White, Color::Black).bold();
        let text_w = text.chars().count() as u16;
        let x = left.saturating_add(w.saturating_sub(text_w) / 2);
        canvas.put_str(x, top.saturating_add(h / 2), text, style);
    }
}

fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb { r: 80, g: 220, b: 220 },
        PieceKind::O => Color::Rgb { r: 240, g: 220, b: 80 },
        PieceKind::T => Color::Rgb { r: 200, g: 120, b: 220 },
        PieceKind::S => Color::Rgb { r: 100, g: 220, b: 120 },
        PieceKind::Z => Color::Rgb { r: 220, g: 80, b: 80 },
        PieceKind::J => Color::Rgb { r: 80, g: 120, b: 220 },
        PieceKind::L => Color::Rgb { r: 255, g: 165, b: 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{get_shape, Board, Piece, Position};

    fn sample_game() -> Game {
        let mut board = Board::standard();
        board.set(0, 19, Cell::Filled(PieceKind::Z));
        Game::from_parts(
            board,
            Piece::new(get_shape(PieceKind::O), Position::new(4, 0)),
            get_shape(PieceKind::T),
        )
    }

    // Viewport 40x24: frame is 22x22, so the board starts at column 10, row 2.
    const VIEW: Viewport = Viewport {
        width: 40,
        height: 24,
    };

    #[test]
    fn draws_locked_cells_and_piece() {
        let canvas = GameView::default().render(&sample_game(), false, VIEW);

        // Locked Z at board (0, 19) -> canvas columns 10..12 on row 2 + 19.
        let bottom = canvas.row_text(21);
        assert_eq!(bottom.chars().skip(10).take(2).collect::<String>(), "██");

        // O piece at board (4..6, 0) -> canvas columns 18..22 on row 2.
        let first = canvas.row_text(2);
        assert_eq!(first.chars().skip(18).take(4).collect::<String>(), "████");
        assert_eq!(canvas.get(9, 2).unwrap().ch, '│');
    }

    #[test]
    fn panel_shows_score_and_next() {
        let canvas = GameView::default().render(&sample_game(), false, VIEW);
        assert!(canvas.row_text(1).contains("SCORE"));
        assert!(canvas.row_text(2).contains('0'));
        assert!(canvas.row_text(7).contains("NEXT"));
        // T preview: one block on the first row, three on the second.
        assert_eq!(canvas.row_text(8).matches('█').count(), 2);
        assert_eq!(canvas.row_text(9).matches('█').count(), 6);
    }

    #[test]
    fn paused_banner() {
        let canvas = GameView::default().render(&sample_game(), true, VIEW);
        assert!(canvas.row_text(12).contains("PAUSED"));
    }

    #[test]
    fn panel_names_next_kind() {
        let canvas = GameView::default().render(&sample_game(), false, VIEW);
        assert!(canvas.row_text(7).contains("NEXT T"));
    }

    #[test]
    fn oversized_layouts_clip_instead_of_overflowing() {
        let wide = Board::new(40_000, 20).unwrap();
        let game = Game::from_parts(
            wide,
            Piece::new(get_shape(PieceKind::O), Position::new(19_999, 0)),
            get_shape(PieceKind::T),
        );
        let canvas = GameView::default().render(&game, true, Viewport::new(80, 24));
        assert_eq!(canvas.width(), 80);
        assert_eq!(canvas.get(0, 1).unwrap().ch, '┌');

        let huge_cells = GameView::new(10_000).render(&sample_game(), false, VIEW);
        assert_eq!(huge_cells.get(0, 1).unwrap().ch, '┌');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        GameView::default().render(&sample_game(), false, Viewport::new(5, 3));
    }
}
