//! Piece module - tetromino shapes and the rotation transform
//!
//! Each kind is defined exactly once, in a square bounding box (2x2 for O,
//! 4x4 for I, 3x3 otherwise). Rotation is a transform of that box -
//! transpose, then reverse each row, a 90 degree clockwise turn - rather
//! than a table of precomputed orientations, so the box must stay square.

use blockfall_types::PieceKind;

/// Largest bounding box among the seven templates (the I piece).
pub const MAX_BOX: usize = 4;

/// A square occupancy matrix in a fixed 4x4 backing array.
///
/// Only the `size x size` top-left corner is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_BOX]; MAX_BOX],
}

impl Shape {
    /// The spawn-orientation template for a kind.
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::I => Self::from_rows(&[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ]),
        }
    }

    /// Build a shape from row slices (non-zero = occupied).
    ///
    /// Panics unless the matrix is square with a side of 2..=4; a
    /// non-square shape would make the rotation transform undefined.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (2..=MAX_BOX).contains(&size),
            "shape box side must be 2..=4, got {}",
            size
        );
        let mut cells = [[false; MAX_BOX]; MAX_BOX];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape box must be square");
            for (x, &value) in row.iter().enumerate() {
                cells[y][x] = value != 0;
            }
        }
        Self {
            size: size as u8,
            rows: cells,
        }
    }

    /// Side length of the bounding box.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the local cell (x, y) is occupied.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.rows[y][x]
    }

    /// The shape turned 90 degrees clockwise.
    ///
    /// Returns a new shape; rotation never mutates in place.
    pub fn rotated(&self) -> Self {
        let size = self.size();
        let mut rows = [[false; MAX_BOX]; MAX_BOX];
        for (y, row) in rows.iter_mut().enumerate().take(size) {
            for (x, cell) in row.iter_mut().enumerate().take(size) {
                // Transpose then reverse each row.
                *cell = self.rows[size - 1 - x][y];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }

    /// Occupied cells in local box coordinates.
    pub fn cells(self) -> impl Iterator<Item = (i8, i8)> {
        let size = self.size();
        (0..size).flat_map(move |y| {
            (0..size).filter_map(move |x| self.rows[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// Number of occupied cells (4 for every tetromino template).
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

/// A tetromino instance: kind, current shape, and box origin on the grid.
///
/// The origin is the box's top-left cell and is mutated in place by
/// movement and wall kicks; the shape is replaced on rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece of the given kind at origin (0, 0).
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::template(kind),
            x: 0,
            y: 0,
        }
    }

    /// Side length of the current bounding box.
    pub fn width(&self) -> usize {
        self.shape.size()
    }

    /// Occupied cells in absolute grid coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(shape: Shape) -> Vec<(i8, i8)> {
        shape.cells().collect()
    }

    #[test]
    fn test_template_layouts() {
        assert_eq!(
            occupied(Shape::template(PieceKind::Z)),
            vec![(0, 0), (1, 0), (1, 1), (2, 1)]
        );
        assert_eq!(
            occupied(Shape::template(PieceKind::T)),
            vec![(1, 0), (0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(
            occupied(Shape::template(PieceKind::O)),
            vec![(0, 0), (1, 0), (0, 1), (1, 1)]
        );
        assert_eq!(
            occupied(Shape::template(PieceKind::I)),
            vec![(0, 1), (1, 1), (2, 1), (3, 1)]
        );
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            let shape = Shape::template(kind);
            assert_eq!(shape.cell_count(), 4, "{:?}", kind);
            assert_eq!(shape.size(), kind.box_size());
        }
    }

    #[test]
    fn test_rotation_turns_i_into_column() {
        let rotated = Shape::template(PieceKind::I).rotated();
        assert_eq!(occupied(rotated), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_rotation_turns_t_clockwise() {
        // Pointing up -> pointing right.
        let rotated = Shape::template(PieceKind::T).rotated();
        assert_eq!(occupied(rotated), vec![(1, 0), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn test_o_rotation_is_identity() {
        let shape = Shape::template(PieceKind::O);
        assert_eq!(shape.rotated(), shape);
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for kind in PieceKind::ALL {
            let shape = Shape::template(kind);
            let full_turn = shape.rotated().rotated().rotated().rotated();
            assert_eq!(full_turn, shape, "{:?}", kind);
        }
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square_shape_panics() {
        Shape::from_rows(&[&[1, 0], &[1, 0, 1]]);
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let mut piece = Piece::new(PieceKind::O);
        piece.x = 4;
        piece.y = 10;
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 10), (5, 10), (4, 11), (5, 11)]);
    }
}
