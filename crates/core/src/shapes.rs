//! Shape catalog - piece masks and random selection
//!
//! Every piece type has exactly one canonical mask: a square binary grid of side
//! 2, 3 or 4 describing which cells of the bounding box are occupied. Other
//! orientations are computed on demand by rotating the mask 90° clockwise; four
//! rotations always give back the canonical mask.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::{PieceKind, MAX_SHAPE_SIZE};

const MAX: usize = MAX_SHAPE_SIZE as usize;

/// Offset of one occupied cell inside a shape's bounding box, `(column, row)`.
pub type CellOffset = (i32, i32);

/// Occupied cells of a shape; at most a full 4x4 mask.
pub type ShapeCells = ArrayVec<CellOffset, { MAX * MAX }>;

/// An immutable square binary mask tagged with the piece kind it came from.
///
/// Only the top-left `size x size` corner of `mask` is meaningful; the rest is
/// always zero so that derived equality compares orientations cell for cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    size: u8,
    mask: [[u8; MAX]; MAX],
}

impl Shape {
    /// Build a shape from mask rows.
    ///
    /// Panics if the mask is not square, is larger than 4x4, is empty, or
    /// contains anything other than 0 and 1. Malformed masks are a programming
    /// error, never runtime input.
    pub fn from_rows(kind: PieceKind, rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX).contains(&size),
            "shape mask must have 1..={} rows, got {}",
            MAX,
            size
        );

        let mut mask = [[0u8; MAX]; MAX];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape mask must be square");
            for (x, &bit) in row.iter().enumerate() {
                assert!(bit <= 1, "shape mask must be binary, got {}", bit);
                mask[y][x] = bit;
            }
        }

        let shape = Self {
            kind,
            size: size as u8,
            mask,
        };
        assert!(!shape.cells().is_empty(), "shape mask must occupy a cell");
        shape
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the bounding box
    pub fn size(&self) -> i32 {
        self.size as i32
    }

    /// Whether the mask cell at `(x, y)` is occupied. Outside the box is empty.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.size() || y >= self.size() {
            return false;
        }
        self.mask[y as usize][x as usize] == 1
    }

    /// Occupied cells in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for y in 0..self.size() {
            for x in 0..self.size() {
                if self.is_occupied(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// Rotate 90° clockwise.
    ///
    /// `rotated[y][x] = original[size - 1 - x][y]`, which keeps the result inside
    /// the same bounding box.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut mask = [[0u8; MAX]; MAX];
        for (y, row) in mask.iter_mut().enumerate().take(n) {
            for (x, bit) in row.iter_mut().enumerate().take(n) {
                *bit = self.mask[n - 1 - x][y];
            }
        }
        Self { mask, ..*self }
    }

    /// Index of the first mask row containing an occupied cell.
    pub fn top_row(&self) -> i32 {
        (0..self.size())
            .find(|&y| (0..self.size()).any(|x| self.is_occupied(x, y)))
            .unwrap_or(0)
    }

    /// Mask rows as 0/1 vectors, for callers that want the plain representation.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        let n = self.size as usize;
        self.mask[..n].iter().map(|row| row[..n].to_vec()).collect()
    }
}

/// Catalog of canonical masks, one per piece kind, built once at load.
pub static SHAPES: [Shape; 7] = [
    canonical(
        PieceKind::I,
        4,
        [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    canonical(
        PieceKind::O,
        2,
        [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    canonical(
        PieceKind::T,
        3,
        [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    canonical(
        PieceKind::S,
        3,
        [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    canonical(
        PieceKind::Z,
        3,
        [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    canonical(
        PieceKind::J,
        3,
        [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    canonical(
        PieceKind::L,
        3,
        [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
];

const fn canonical(kind: PieceKind, size: u8, mask: [[u8; MAX]; MAX]) -> Shape {
    Shape { kind, size, mask }
}

/// Canonical shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => SHAPES[0],
        PieceKind::O => SHAPES[1],
        PieceKind::T => SHAPES[2],
        PieceKind::S => SHAPES[3],
        PieceKind::Z => SHAPES[4],
        PieceKind::J => SHAPES[5],
        PieceKind::L => SHAPES[6],
    }
}

/// Pick one catalog shape uniformly at random.
pub fn pick_random_shape(rng: &mut impl RandomSource) -> Shape {
    SHAPES[rng.next_below(SHAPES.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn catalog_has_one_shape_per_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).kind(), kind);
        }
    }

    #[test]
    fn every_catalog_shape_has_four_cells() {
        for shape in SHAPES.iter() {
            assert_eq!(shape.cells().len(), 4, "{:?}", shape.kind());
        }
    }

    #[test]
    fn from_rows_matches_catalog() {
        let t = Shape::from_rows(PieceKind::T, &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]);
        assert_eq!(t, get_shape(PieceKind::T));
        assert_eq!(t.rows(), vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn rotate_t_clockwise() {
        let east = get_shape(PieceKind::T).rotated_cw();
        assert_eq!(east.rows(), vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn rotate_i_clockwise_is_vertical() {
        let vertical = get_shape(PieceKind::I).rotated_cw();
        assert_eq!(vertical.cells().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for shape in SHAPES.iter() {
            let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(&back, shape);
        }
    }

    #[test]
    fn o_rotation_is_fixed_point() {
        let o = get_shape(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn top_row_skips_empty_rows() {
        assert_eq!(get_shape(PieceKind::I).top_row(), 1);
        assert_eq!(get_shape(PieceKind::T).top_row(), 0);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn non_square_mask_panics() {
        Shape::from_rows(PieceKind::I, &[&[1, 1, 1, 1]]);
    }

    #[test]
    #[should_panic(expected = "binary")]
    fn non_binary_mask_panics() {
        Shape::from_rows(PieceKind::O, &[&[2, 1], &[1, 1]]);
    }

    #[test]
    fn pick_random_shape_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(7);
        let mut b = SimpleRng::new(7);
        for _ in 0..50 {
            assert_eq!(pick_random_shape(&mut a), pick_random_shape(&mut b));
        }
    }

    #[test]
    fn pick_random_shape_covers_catalog() {
        let mut rng = SimpleRng::new(12345);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = pick_random_shape(&mut rng).kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "{:?}", seen);
    }
}
