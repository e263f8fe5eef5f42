//! Board state machine tests: movement, locking, line clears, pause and game over

use blockfall::core::{Board, Piece, ShapeSequence, StatusLine, Ticker};
use blockfall::types::{
    GameAction, GameStatus, Shape, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, STATUS_GAME_OVER,
    STATUS_PAUSED, TICK_INTERVAL_MS,
};

type TestBoard = Board<ShapeSequence, StatusLine>;

fn board_with(shapes: &[Shape]) -> TestBoard {
    Board::with_parts(
        Ticker::default(),
        ShapeSequence::new(shapes.iter().copied()),
        StatusLine::new(),
    )
}

fn started_with(shapes: &[Shape]) -> TestBoard {
    let mut board = board_with(shapes);
    board.start();
    board
}

fn fill_row_except(board: &mut TestBoard, y: i8, gaps: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&x) {
            board.grid_mut().set(x, y, Shape::Z).unwrap();
        }
    }
}

// ============== Lifecycle ==============

#[test]
fn test_start_spawns_and_runs() {
    let board = started_with(&[Shape::T]);

    assert_eq!(board.status(), GameStatus::Running);
    assert!(board.started());
    assert!(board.ticker().is_running());
    assert_eq!(board.active_piece().shape(), Shape::T);
    assert_eq!(board.active_position(), (SPAWN_X, BOARD_HEIGHT as i8 - 1));
    assert_eq!(board.status_sink().text(), "0");
    assert_eq!(board.lines_cleared(), 0);
}

#[test]
fn test_start_clears_previous_game() {
    let mut board = started_with(&[Shape::O]);
    board.grid_mut().set(0, 0, Shape::I).unwrap();
    board.drop_down();

    board.start();

    assert_eq!(board.grid().occupied(), 0);
    assert_eq!(board.lines_cleared(), 0);
    assert!(!board.falling_finished());
}

#[test]
fn test_start_while_paused_is_ignored() {
    let mut board = started_with(&[Shape::I, Shape::O]);
    board.drop_down();
    board.pause();

    let grid_before = board.grid().clone();
    let lines_before = board.lines_cleared();
    let active_before = board.active_piece();

    board.start();

    assert_eq!(board.grid(), &grid_before);
    assert_eq!(board.lines_cleared(), lines_before);
    assert_eq!(board.active_piece(), active_before);
    assert!(board.started());
    assert!(board.paused());
    assert_eq!(board.status_sink().text(), STATUS_PAUSED);
}

// ============== Movement ==============

#[test]
fn test_try_move_commits_valid_move() {
    let mut board = started_with(&[Shape::T]);
    let piece = board.active_piece();
    let (x, y) = board.active_position();

    assert!(board.try_move(piece, x - 1, y - 2));
    assert_eq!(board.active_position(), (x - 1, y - 2));
}

#[test]
fn test_try_move_rejects_without_side_effects() {
    let mut board = started_with(&[Shape::T]);
    board.grid_mut().set(2, 10, Shape::S).unwrap();
    let piece = board.active_piece();
    let grid_before = board.grid().clone();
    let pos_before = board.active_position();

    // Off the left wall, through the floor, above the ceiling, onto a block.
    assert!(!board.try_move(piece, 0, 10));
    assert!(!board.try_move(piece, 5, 0));
    assert!(!board.try_move(piece, 5, BOARD_HEIGHT as i8));
    assert!(!board.try_move(piece, 2, 10));
    assert!(!board.try_move(piece.rotate_left(), 2, 11));

    assert_eq!(board.grid(), &grid_before);
    assert_eq!(board.active_position(), pos_before);
    assert_eq!(board.active_piece(), piece);
}

#[test]
fn test_try_move_far_outside_grid_is_rejected() {
    let mut board = started_with(&[Shape::T]);
    let piece = board.active_piece();
    let pos_before = board.active_position();

    // Pivots whose cell offsets leave the i8 range.
    assert!(!board.try_move(piece, i8::MAX, 10));
    assert!(!board.try_move(piece, i8::MIN, 10));
    assert!(!board.try_move(piece, 5, i8::MIN));
    assert!(!board.try_move(piece.rotate_left(), 5, i8::MAX));

    assert_eq!(board.active_position(), pos_before);
    assert_eq!(board.active_piece(), piece);
    assert_eq!(board.grid().occupied(), 0);
}

#[test]
fn test_rotation_blocked_by_wall_is_rejected() {
    let mut board = started_with(&[Shape::I]);
    let (_, y) = board.active_position();
    // Vertical I one column off the left wall.
    assert!(board.try_move(board.active_piece(), 1, y - 5));
    let before = board.active_piece();

    // Right turn lays it flat towards negative x and hits the wall.
    board.apply_action(GameAction::RotateRight);
    assert_eq!(board.active_piece(), before);
    assert_eq!(board.active_position(), (1, y - 5));

    // Left turn lays it flat towards positive x and fits.
    board.apply_action(GameAction::RotateLeft);
    assert_eq!(board.active_piece(), before.rotate_left());
}

#[test]
fn test_one_line_down_moves_one_row() {
    let mut board = started_with(&[Shape::O]);
    let (x, y) = board.active_position();
    board.one_line_down();
    assert_eq!(board.active_position(), (x, y - 1));
    assert_eq!(board.grid().occupied(), 0);
}

#[test]
fn test_one_line_down_on_floor_locks() {
    let mut board = started_with(&[Shape::O, Shape::T]);
    let (x, _) = board.active_position();
    // O with pivot on row 1 rests on the floor.
    assert!(board.try_move(board.active_piece(), x, 1));

    board.one_line_down();

    assert_eq!(board.grid().occupied(), 4);
    assert_eq!(board.shape_at(x, 0), Ok(Shape::O));
    assert_eq!(board.active_piece().shape(), Shape::T);
}

// ============== Hard Drop ==============

#[test]
fn test_hard_drop_lands_flat_piece_on_floor() {
    let mut board = started_with(&[Shape::T, Shape::O]);
    let before = board.grid().occupied();

    board.drop_down();

    assert_eq!(board.grid().occupied(), before + 4);
    // Flat side of the T (offset y = 0) ends on row 1, its stem on row 0.
    assert_eq!(board.shape_at(5, 1), Ok(Shape::T));
    assert_eq!(board.shape_at(6, 1), Ok(Shape::T));
    assert_eq!(board.shape_at(7, 1), Ok(Shape::T));
    assert_eq!(board.shape_at(6, 0), Ok(Shape::T));
    // The next piece is already falling.
    assert_eq!(board.active_piece().shape(), Shape::O);
}

#[test]
fn test_hard_drop_rotated_flat_piece_reaches_row_zero() {
    let mut board = started_with(&[Shape::I, Shape::O]);
    let (x, y) = board.active_position();
    let flat = board.active_piece().rotate_left();
    assert!(board.try_move(flat, x - 1, y));

    board.drop_down();

    // Pivot at x - 1, cells from x - 2 to x + 1.
    for cx in (x - 2)..(x + 2) {
        assert_eq!(board.shape_at(cx, 0), Ok(Shape::I), "column {}", cx);
    }
    assert_eq!(board.grid().occupied(), 4);
}

#[test]
fn test_hard_drop_stops_on_stack() {
    let mut board = started_with(&[Shape::O, Shape::O]);
    let (x, _) = board.active_position();
    board.grid_mut().set(x, 4, Shape::J).unwrap();

    board.drop_down();

    assert_eq!(board.shape_at(x, 5), Ok(Shape::O));
    assert_eq!(board.shape_at(x, 6), Ok(Shape::O));
    assert_eq!(board.grid().occupied(), 5);
}

#[test]
fn test_hard_drop_locks_exactly_once() {
    let mut board = started_with(&[Shape::S]);
    for n in 1..=3 {
        board.drop_down();
        assert_eq!(board.grid().occupied(), 4 * n);
    }
}

// ============== Locking ==============

#[test]
fn test_piece_dropped_writes_only_active_cells() {
    let mut board = started_with(&[Shape::L, Shape::O]);
    board.grid_mut().set(0, 0, Shape::I).unwrap();
    let (x, _) = board.active_position();
    assert!(board.try_move(board.active_piece(), x, 10));
    let cells = board.active_cells().unwrap();
    let before = board.grid().clone();

    board.piece_dropped();

    for y in 0..BOARD_HEIGHT as i8 {
        for cx in 0..BOARD_WIDTH as i8 {
            let now = board.shape_at(cx, y).unwrap();
            if cells.contains(&(cx, y)) {
                assert_eq!(now, Shape::L);
            } else {
                assert_eq!(now, before.shape_at(cx, y).unwrap());
            }
        }
    }
}

// ============== Line Clearing ==============

#[test]
fn test_full_floor_row_clears() {
    let mut board = started_with(&[Shape::O]);
    fill_row_except(&mut board, 0, &[]);
    board.grid_mut().set(4, 1, Shape::T).unwrap();

    assert_eq!(board.remove_full_lines(), 1);

    assert_eq!(board.lines_cleared(), 1);
    assert_eq!(board.shape_at(4, 0), Ok(Shape::T));
    assert_eq!(board.shape_at(0, 0), Ok(Shape::Empty));
    assert_eq!(board.status_sink().text(), "1");
    assert!(board.falling_finished());
    assert!(board.active_piece().is_empty());
    assert!(board.take_redraw_request());
}

#[test]
fn test_no_full_rows_is_idempotent() {
    let mut board = started_with(&[Shape::O]);
    fill_row_except(&mut board, 0, &[3]);
    let updates = board.status_sink().updates();
    let active = board.active_piece();

    assert_eq!(board.remove_full_lines(), 0);
    let grid_once = board.grid().clone();
    assert_eq!(board.remove_full_lines(), 0);

    assert_eq!(board.grid(), &grid_once);
    assert_eq!(board.lines_cleared(), 0);
    assert_eq!(board.status_sink().updates(), updates);
    assert!(!board.falling_finished());
    assert_eq!(board.active_piece(), active);
}

#[test]
fn test_two_full_rows_clear_in_one_call() {
    let mut board = started_with(&[Shape::O]);
    fill_row_except(&mut board, 0, &[]);
    fill_row_except(&mut board, 1, &[]);
    board.grid_mut().set(7, 2, Shape::S).unwrap();
    board.grid_mut().set(7, 5, Shape::J).unwrap();

    assert_eq!(board.remove_full_lines(), 2);

    assert_eq!(board.lines_cleared(), 2);
    assert_eq!(board.shape_at(7, 0), Ok(Shape::S));
    assert_eq!(board.shape_at(7, 3), Ok(Shape::J));
    assert_eq!(board.grid().occupied(), 2);
}

#[test]
fn test_drop_completing_line_defers_spawn_to_next_tick() {
    let mut board = started_with(&[Shape::I, Shape::O]);
    // Floor row with a single gap under column 6.
    fill_row_except(&mut board, 0, &[SPAWN_X]);

    board.drop_down();

    assert_eq!(board.lines_cleared(), 1);
    assert!(board.active_piece().is_empty());
    assert!(board.falling_finished());
    // The rest of the vertical I (three cells) dropped by one row.
    assert_eq!(board.grid().occupied(), 3);
    assert_eq!(board.shape_at(SPAWN_X, 0), Ok(Shape::I));

    // Input is ignored until the next piece appears.
    assert!(!board.apply_action(GameAction::MoveLeft));

    board.tick();
    assert!(!board.falling_finished());
    assert_eq!(board.active_piece().shape(), Shape::O);
}

// ============== Game Over ==============

#[test]
fn test_blocked_spawn_ends_game() {
    let mut board = started_with(&[Shape::O]);
    assert!(board.ticker().is_running());
    board.grid_mut().set(SPAWN_X, BOARD_HEIGHT as i8 - 1, Shape::Z).unwrap();

    board.new_piece();

    assert!(!board.started());
    assert!(board.active_piece().is_empty());
    assert!(!board.ticker().is_running());
    assert_eq!(board.status(), GameStatus::GameOver);
    assert_eq!(board.status_sink().text(), STATUS_GAME_OVER);
}

#[test]
fn test_stack_to_ceiling_ends_game() {
    let mut board = started_with(&[Shape::I]);
    // Each vertical I adds four rows in column 6; after five drops the
    // stack reaches row 19 and the next spawn is blocked.
    for _ in 0..10 {
        if board.status() != GameStatus::Running {
            break;
        }
        board.apply_action(GameAction::HardDrop);
    }

    assert_eq!(board.status(), GameStatus::GameOver);
    assert!(board.active_cells().is_none());
}

#[test]
fn test_game_over_ignores_input_except_restart() {
    let mut board = started_with(&[Shape::O]);
    board.grid_mut().set(SPAWN_X, BOARD_HEIGHT as i8 - 1, Shape::Z).unwrap();
    board.new_piece();
    let grid_before = board.grid().clone();

    for action in [
        GameAction::MoveLeft,
        GameAction::RotateLeft,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::Pause,
    ] {
        assert!(!board.apply_action(action));
    }
    board.tick();
    assert_eq!(board.grid(), &grid_before);

    assert!(board.apply_action(GameAction::Restart));
    assert_eq!(board.status(), GameStatus::Running);
    assert_eq!(board.grid().occupied(), 0);
    assert!(board.ticker().is_running());
}

// ============== Pause ==============

#[test]
fn test_pause_requires_started_game() {
    let mut board = board_with(&[Shape::T]);
    board.pause();
    assert!(!board.paused());
    assert_eq!(board.status(), GameStatus::Idle);
}

#[test]
fn test_pause_toggles_ticker_and_status() {
    let mut board = started_with(&[Shape::T]);

    board.apply_action(GameAction::Pause);
    assert_eq!(board.status(), GameStatus::Paused);
    assert!(!board.ticker().is_running());
    assert_eq!(board.status_sink().text(), STATUS_PAUSED);

    board.apply_action(GameAction::Pause);
    assert_eq!(board.status(), GameStatus::Running);
    assert!(board.ticker().is_running());
    assert_eq!(board.status_sink().text(), "0");
}

#[test]
fn test_paused_board_ignores_moves_and_time() {
    let mut board = started_with(&[Shape::T]);
    board.pause();
    let pos = board.active_position();

    assert!(!board.apply_action(GameAction::MoveLeft));
    assert!(!board.apply_action(GameAction::HardDrop));
    board.update(TICK_INTERVAL_MS * 10);
    board.tick();

    assert_eq!(board.active_position(), pos);
    assert_eq!(board.grid().occupied(), 0);
}

#[test]
fn test_restart_while_paused_does_nothing() {
    let mut board = started_with(&[Shape::T]);
    board.pause();
    board.apply_action(GameAction::Restart);
    assert!(board.paused());
}

// ============== Input Gating & Ticks ==============

#[test]
fn test_idle_board_ignores_actions() {
    let mut board = board_with(&[Shape::T]);
    assert!(!board.apply_action(GameAction::MoveLeft));
    assert!(!board.apply_action(GameAction::HardDrop));
    assert_eq!(board.grid().occupied(), 0);
}

#[test]
fn test_move_actions_shift_piece() {
    let mut board = started_with(&[Shape::T]);
    let (x, y) = board.active_position();

    board.apply_action(GameAction::MoveLeft);
    assert_eq!(board.active_position(), (x - 1, y));
    board.apply_action(GameAction::MoveRight);
    board.apply_action(GameAction::MoveRight);
    assert_eq!(board.active_position(), (x + 1, y));
    board.apply_action(GameAction::SoftDrop);
    assert_eq!(board.active_position(), (x + 1, y - 1));
}

#[test]
fn test_walls_stop_movement() {
    let mut board = started_with(&[Shape::O]);
    for _ in 0..20 {
        board.apply_action(GameAction::MoveRight);
    }
    let cells = board.active_cells().unwrap();
    assert_eq!(cells.iter().map(|&(x, _)| x).max(), Some(BOARD_WIDTH as i8 - 1));

    for _ in 0..20 {
        board.apply_action(GameAction::MoveLeft);
    }
    let cells = board.active_cells().unwrap();
    assert_eq!(cells.iter().map(|&(x, _)| x).min(), Some(0));
}

#[test]
fn test_gravity_reaches_floor_and_locks() {
    let mut board = started_with(&[Shape::O, Shape::T]);
    // O spawns with its pivot on row 21 and needs 20 ticks to reach row 1,
    // then one more tick locks it.
    for _ in 0..20 {
        board.tick();
    }
    assert_eq!(board.grid().occupied(), 0);
    board.tick();
    assert_eq!(board.grid().occupied(), 4);
    assert_eq!(board.active_piece().shape(), Shape::T);
}

#[test]
fn test_update_converts_time_to_ticks() {
    let mut board = started_with(&[Shape::O]);
    let (_, y) = board.active_position();

    board.update(TICK_INTERVAL_MS - 1);
    assert_eq!(board.active_position().1, y);
    board.update(1);
    assert_eq!(board.active_position().1, y - 1);
}

#[test]
fn test_snapshot_reflects_board() {
    let mut board = started_with(&[Shape::T]);
    board.grid_mut().set(0, 0, Shape::J).unwrap();

    let snap = board.snapshot();

    assert_eq!(snap.rows[0][0], Shape::J);
    assert_eq!(snap.status, GameStatus::Running);
    let active = snap.active.unwrap();
    assert_eq!(active.shape, Shape::T);
    assert_eq!(Some(active.cells), board.active_cells());
    assert_eq!(snap.visible_at(SPAWN_X, BOARD_HEIGHT as i8 - 1), Shape::T);
}

#[test]
fn test_seeded_boards_play_identically() {
    let mut a = Board::new(2024);
    let mut b = Board::new(2024);
    a.start();
    b.start();
    for _ in 0..30 {
        a.apply_action(GameAction::HardDrop);
        b.apply_action(GameAction::HardDrop);
        assert_eq!(a.active_piece(), b.active_piece());
    }
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn test_empty_piece_helper_matches_board_sentinel() {
    let board = board_with(&[Shape::T]);
    assert_eq!(board.active_piece(), Piece::empty());
}
