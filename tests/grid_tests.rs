//! Grid behavior tests driven through the public facade.

use blockfall::core::Grid;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);
    assert_eq!(grid.occupied_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(None));
            assert!(!grid.is_occupied(x, y));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new();

    grid.set(5, 10, Some(PieceKind::T));
    assert_eq!(grid.get(5, 10), Some(Some(PieceKind::T)));

    grid.set(0, 0, Some(PieceKind::I));
    assert_eq!(grid.get(0, 0), Some(Some(PieceKind::I)));

    grid.set(5, 10, None);
    assert_eq!(grid.get(5, 10), Some(None));
}

#[test]
fn test_occupancy_is_tolerant_above_and_strict_elsewhere() {
    let mut grid = Grid::new();
    grid.set(4, 0, Some(PieceKind::Z));

    // Above the board: never occupied, even over a filled column.
    assert!(!grid.is_occupied(4, -1));
    assert!(!grid.is_occupied(4, -5));

    // Side walls and the floor always count as occupied.
    assert!(grid.is_occupied(-1, 10));
    assert!(grid.is_occupied(BOARD_WIDTH as i8, 10));
    assert!(grid.is_occupied(5, BOARD_HEIGHT as i8));

    assert!(grid.is_occupied(4, 0));
    assert!(!grid.is_occupied(5, 0));
}

#[test]
fn test_clear_single_full_row() {
    let mut grid = Grid::new();
    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, BOARD_HEIGHT as i8 - 1, Some(PieceKind::J));
    }
    grid.set(3, BOARD_HEIGHT as i8 - 2, Some(PieceKind::S));

    assert_eq!(grid.clear_full_rows(), 1);

    // The lone cell above slid down into the cleared row.
    assert_eq!(grid.get(3, BOARD_HEIGHT as i8 - 1), Some(Some(PieceKind::S)));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_clear_separated_full_rows_in_one_call() {
    let mut grid = Grid::new();
    // Full rows at 15 and 18, partial cells in between.
    for x in 0..BOARD_WIDTH as i8 {
        grid.set(x, 15, Some(PieceKind::L));
        grid.set(x, 18, Some(PieceKind::L));
    }
    grid.set(0, 16, Some(PieceKind::T));
    grid.set(9, 17, Some(PieceKind::T));
    grid.set(5, 19, Some(PieceKind::T));

    assert_eq!(grid.clear_full_rows(), 2);

    // Partial rows kept their relative order, shifted down by the clears.
    assert_eq!(grid.get(0, 17), Some(Some(PieceKind::T)));
    assert_eq!(grid.get(9, 18), Some(Some(PieceKind::T)));
    assert_eq!(grid.get(5, 19), Some(Some(PieceKind::T)));
    assert_eq!(grid.occupied_count(), 3);
}

#[test]
fn test_clear_full_rows_idempotent_when_none_full() {
    let mut grid = Grid::new();
    grid.set(0, 19, Some(PieceKind::O));
    grid.set(9, 19, Some(PieceKind::O));
    let before = grid.clone();

    assert_eq!(grid.clear_full_rows(), 0);
    assert_eq!(grid, before);

    // And again, for good measure.
    assert_eq!(grid.clear_full_rows(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_color_id_export_stays_in_range() {
    let mut grid = Grid::new();
    for (i, kind) in PieceKind::ALL.iter().enumerate() {
        grid.set(i as i8, 19, Some(*kind));
    }

    let mut out = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    grid.write_color_ids(&mut out);

    for row in out.iter() {
        for &id in row.iter() {
            assert!(id <= 7);
        }
    }
    for (i, kind) in PieceKind::ALL.iter().enumerate() {
        assert_eq!(out[19][i], kind.color_id());
    }
}
