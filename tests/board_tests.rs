//! Board tests - accessors, spawning, and moves

use twenty48::core::{Board, BoardError, ScriptedRng};
use twenty48::types::{Direction, Tile};

/// Board with a scripted RNG and an empty grid
fn empty_board(height: usize, width: usize) -> Board<ScriptedRng> {
    let mut board = Board::with_rng(height, width, ScriptedRng::new()).unwrap();
    board.clear();
    board
}

/// Overwrite every cell from `rows` (top to bottom)
fn seed<R: twenty48::core::SpawnRng>(board: &mut Board<R>, rows: &[&[Tile]]) {
    for (row, values) in rows.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            board.set_tile(row, col, value).unwrap();
        }
    }
}

fn grid<R>(board: &Board<R>) -> Vec<Vec<Tile>> {
    board.rows().map(|row| row.to_vec()).collect()
}

#[test]
fn test_board_dimensions() {
    let board = Board::with_seed(4, 6, 1).unwrap();
    assert_eq!(board.grid_height(), 4);
    assert_eq!(board.grid_width(), 6);
    assert_eq!(board.cells().len(), 24);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::with_seed(4, 6, 1).unwrap();

    board.set_tile(1, 1, 5).unwrap();
    assert_eq!(board.get_tile(1, 1), Ok(5));

    board.set_tile(0, 0, 10).unwrap();
    assert_eq!(board.get_tile(0, 0), Ok(10));

    board.set_tile(3, 5, 7).unwrap();
    assert_eq!(board.get_tile(3, 5), Ok(7));
}

#[test]
fn test_board_out_of_bounds_rejected() {
    let mut board = empty_board(4, 6);

    assert_eq!(
        board.get_tile(4, 0),
        Err(BoardError::OutOfBounds {
            row: 4,
            col: 0,
            height: 4,
            width: 6
        })
    );
    assert!(board.get_tile(0, 6).is_err());

    // Rejected before any mutation
    let before = board.cells().to_vec();
    assert!(board.set_tile(0, 6, 2).is_err());
    assert!(board.set_tile(9, 9, 2).is_err());
    assert_eq!(board.cells(), before.as_slice());
}

#[test]
fn test_board_rejects_degenerate_grids() {
    assert_eq!(
        Board::new(0, 4).unwrap_err(),
        BoardError::GridTooSmall {
            height: 0,
            width: 4
        }
    );
    assert!(Board::new(4, 0).is_err());
    assert!(Board::new(1, 1).is_err());

    // Two cells are enough for the initial tiles
    let board = Board::new(1, 2).unwrap();
    assert_eq!(board.tile_count(), 2);
}

#[test]
fn test_reset_places_two_tiles() {
    let mut board = Board::with_seed(4, 4, 99).unwrap();
    assert_eq!(board.tile_count(), 2);
    for &tile in board.cells() {
        assert!(tile == 0 || tile == 2 || tile == 4, "unexpected tile {}", tile);
    }

    board.set_tile(0, 0, 64).unwrap();
    board.set_tile(3, 3, 128).unwrap();
    board.reset();
    assert_eq!(board.tile_count(), 2);
    assert!(board.cells().iter().all(|&t| t <= 4));
}

#[test]
fn test_find_random_empty_tile_single_candidate() {
    let mut board = empty_board(2, 2);
    seed(&mut board, &[&[2, 2], &[4, 0]]);

    assert_eq!(board.find_random_empty_tile(), Some((1, 1)));

    board.set_tile(1, 1, 4).unwrap();
    assert_eq!(board.find_random_empty_tile(), None);
}

#[test]
fn test_find_random_empty_tile_is_empty_cell() {
    let mut board = Board::with_seed(4, 4, 7).unwrap();
    board.set_tile(0, 0, 2).unwrap();
    board.set_tile(2, 3, 8).unwrap();

    for _ in 0..50 {
        let (row, col) = board.find_random_empty_tile().unwrap();
        assert_eq!(board.get_tile(row, col), Ok(0));
    }
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = empty_board(2, 3);
    seed(&mut board, &[&[2, 0, 4], &[0, 8, 0]]);
    assert_eq!(board.empty_cells(), vec![(0, 1), (1, 0), (1, 2)]);
}

#[test]
fn test_new_tile_value_follows_draw() {
    let mut board = empty_board(2, 2);
    board.rng_mut().push_spawn(0.9, 2).push_spawn(0.91, 0);

    assert_eq!(board.new_tile(), Some((1, 0)));
    assert_eq!(board.get_tile(1, 0), Ok(2));

    assert_eq!(board.new_tile(), Some((0, 0)));
    assert_eq!(board.get_tile(0, 0), Ok(4));
}

#[test]
fn test_new_tile_on_full_board_is_noop() {
    let mut board = empty_board(2, 2);
    seed(&mut board, &[&[2, 4], &[8, 16]]);

    assert_eq!(board.new_tile(), None);
    assert_eq!(grid(&board), vec![vec![2, 4], vec![8, 16]]);
}

#[test]
fn test_move_up_reference_board() {
    let mut board = Board::with_seed(4, 4, 3).unwrap();
    seed(
        &mut board,
        &[&[4, 2, 2, 2], &[0, 0, 2, 8], &[4, 2, 2, 8], &[0, 2, 0, 4]],
    );

    assert!(board.move_tiles(Direction::Up));

    assert_eq!(board.get_tile(0, 0), Ok(8));
    assert_eq!(board.get_tile(0, 1), Ok(4));
    assert_eq!(board.get_tile(0, 2), Ok(4));
    assert_eq!(board.get_tile(0, 3), Ok(2));
    assert_eq!(board.get_tile(1, 1), Ok(2));
    assert_eq!(board.get_tile(1, 2), Ok(2));
    assert_eq!(board.get_tile(1, 3), Ok(16));
    assert_eq!(board.get_tile(2, 3), Ok(4));

    // 8 slid tiles plus exactly one spawn
    assert_eq!(board.tile_count(), 9);
}

#[test]
fn test_move_up_reference_board_exact_spawn() {
    let mut board = empty_board(4, 4);
    seed(
        &mut board,
        &[&[4, 2, 2, 2], &[0, 0, 2, 8], &[4, 2, 2, 8], &[0, 2, 0, 4]],
    );
    // Empty cells after the slide, row-major: (1,0) (2,0) (2,1) (2,2) (3,0) ...
    board.rng_mut().push_spawn(0.95, 2);

    assert!(board.move_tiles(Direction::Up));
    assert_eq!(
        grid(&board),
        vec![
            vec![8, 4, 4, 2],
            vec![0, 2, 2, 16],
            vec![0, 4, 0, 4],
            vec![0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_move_each_direction() {
    let start: &[&[Tile]] = &[&[2, 0, 2], &[0, 4, 0], &[4, 4, 8]];

    let cases: [(Direction, Vec<Vec<Tile>>); 4] = [
        (
            Direction::Up,
            vec![vec![2, 8, 2], vec![4, 0, 8], vec![0, 0, 0]],
        ),
        (
            Direction::Down,
            vec![vec![0, 0, 0], vec![2, 0, 2], vec![4, 8, 8]],
        ),
        (
            Direction::Left,
            vec![vec![4, 0, 0], vec![4, 0, 0], vec![8, 8, 0]],
        ),
        (
            Direction::Right,
            vec![vec![0, 0, 4], vec![0, 0, 4], vec![0, 8, 8]],
        ),
    ];

    for (direction, expected) in cases {
        let mut board = empty_board(3, 3);
        seed(&mut board, start);
        // Push the spawn somewhere we can strip it: the last empty cell
        let empty_after = expected.iter().flatten().filter(|&&t| t == 0).count();
        board.rng_mut().push_spawn(0.0, empty_after - 1);

        assert!(board.move_tiles(direction), "{:?} should change the board", direction);

        let mut got = grid(&board);
        let (r, c) = last_zero(&expected);
        assert_eq!(got[r][c], 2, "{:?}: spawn not in last empty cell", direction);
        got[r][c] = 0;
        assert_eq!(got, expected, "{:?}", direction);
    }
}

fn last_zero(rows: &[Vec<Tile>]) -> (usize, usize) {
    let mut last = (0, 0);
    for (r, row) in rows.iter().enumerate() {
        for (c, &t) in row.iter().enumerate() {
            if t == 0 {
                last = (r, c);
            }
        }
    }
    last
}

#[test]
fn test_move_right_without_change_spawns_nothing() {
    let mut board = Board::with_seed(4, 5, 11).unwrap();
    let rows: &[&[Tile]] = &[
        &[8, 16, 8, 16, 8],
        &[16, 8, 16, 8, 16],
        &[8, 16, 8, 16, 8],
        &[16, 8, 16, 8, 16],
    ];
    seed(&mut board, rows);
    let before = grid(&board);

    assert!(!board.move_tiles(Direction::Right));
    assert_eq!(grid(&board), before);

    // Every direction is blocked on a checkerboard
    for direction in Direction::ALL {
        assert!(!board.move_tiles(direction));
    }
    assert_eq!(grid(&board), before);
}

#[test]
fn test_move_blocked_direction_keeps_tile_count() {
    let mut board = empty_board(4, 4);
    seed(&mut board, &[&[2, 4, 0, 0], &[8, 0, 0, 0]]);

    assert!(!board.move_tiles(Direction::Left));
    assert!(!board.move_tiles(Direction::Up));
    assert_eq!(board.tile_count(), 3);

    assert!(board.move_tiles(Direction::Right));
    assert_eq!(board.tile_count(), 4);
}

#[test]
fn test_display_matches_grid() {
    let mut board = empty_board(2, 2);
    seed(&mut board, &[&[2, 0], &[0, 1024]]);
    assert_eq!(format!("{}", board), "2, 0\n0, 1024\n");
}

#[test]
fn test_snapshot_copies_grid() {
    let mut board = empty_board(2, 3);
    seed(&mut board, &[&[2, 0, 4], &[0, 0, 32]]);

    let snap = board.snapshot();
    assert_eq!(snap.height, 2);
    assert_eq!(snap.width, 3);
    assert_eq!(snap.cells, vec![vec![2, 0, 4], vec![0, 0, 32]]);
    assert_eq!(snap.empty, 3);
    assert_eq!(snap.max_tile, 32);
}
