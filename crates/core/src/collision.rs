//! Collision checking - the single validity predicate behind movement,
//! rotation kicks, spawning, and drop descent.

use crate::grid::Grid;
use crate::piece::Shape;
use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` can sit with its box origin at (x, y).
///
/// Every occupied cell must stay inside the side walls and above the
/// floor, and must not overlap a locked block. Cells above the top edge
/// are fine - pieces overhang the board right after spawning and while
/// rotating near it - but the side-wall check still applies to them.
pub fn is_valid_move(grid: &Grid, shape: Shape, x: i8, y: i8) -> bool {
    shape.cells().all(|(dx, dy)| {
        let gx = x + dx;
        let gy = y + dy;
        if gx < 0 || gx >= BOARD_WIDTH as i8 || gy >= BOARD_HEIGHT as i8 {
            return false;
        }
        gy < 0 || !grid.is_occupied(gx, gy)
    })
}
