//! MineField tests - board rules through the public API

use std::time::{Duration, Instant};

use sweeper::core::{FieldError, MineField, Outcome};
use sweeper::types::{Direction, Position, Symbol, BOARD_HEIGHT, BOARD_WIDTH, MINE_COUNT};

fn pos(row: u16, col: u16) -> Position {
    Position::new(row, col)
}

#[test]
fn test_standard_board_shape() {
    let field = MineField::standard(7);
    assert_eq!(field.width(), BOARD_WIDTH);
    assert_eq!(field.height(), BOARD_HEIGHT);
    assert_eq!(field.mines().count(), MINE_COUNT as usize);
    assert_eq!(field.cursor(), pos(5, 5));
    assert_eq!(field.opened_count(), 0);
    assert!(field.started().is_none());
}

#[test]
fn test_same_seed_same_layout() {
    let a: Vec<_> = MineField::standard(99).mines().collect();
    let b: Vec<_> = MineField::standard(99).mines().collect();
    let c: Vec<_> = MineField::standard(100).mines().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_dense_board_always_places_every_mine() {
    // One safe cell left: placement must still terminate with exact count.
    let field = MineField::new(4, 4, 15, 3).unwrap();
    assert_eq!(field.mines().count(), 15);
}

#[test]
fn test_construction_errors() {
    assert_eq!(MineField::new(0, 5, 1, 1).unwrap_err(), FieldError::EmptyBoard);
    assert_eq!(
        MineField::new(3, 3, 9, 1).unwrap_err(),
        FieldError::TooManyMines { mines: 9, cells: 9 }
    );
    assert_eq!(
        MineField::with_mines(3, 3, [pos(3, 0)]).unwrap_err(),
        FieldError::MineOutOfBounds(pos(3, 0))
    );
    assert_eq!(
        MineField::with_mines(3, 3, [pos(1, 1), pos(1, 1)]).unwrap_err(),
        FieldError::DuplicateMine(pos(1, 1))
    );
}

#[test]
fn test_neighbor_counts_by_location() {
    let field = MineField::with_mines(10, 10, []).unwrap();
    assert_eq!(field.neighbors(pos(0, 0)).len(), 3);
    assert_eq!(field.neighbors(pos(9, 9)).len(), 3);
    assert_eq!(field.neighbors(pos(0, 4)).len(), 5);
    assert_eq!(field.neighbors(pos(6, 9)).len(), 5);
    assert_eq!(field.neighbors(pos(4, 4)).len(), 8);
    assert!(!field.neighbors(pos(4, 4)).contains(&pos(4, 4)));
}

#[test]
fn test_neighbor_mine_count() {
    let field = MineField::with_mines(3, 3, [pos(0, 0), pos(0, 2), pos(2, 2)]).unwrap();
    assert_eq!(field.neighbor_mine_count(pos(1, 1)), 3);
    assert_eq!(field.neighbor_mine_count(pos(0, 1)), 2);
    assert_eq!(field.neighbor_mine_count(pos(2, 0)), 0);
}

#[test]
fn test_flood_fill_opens_zero_region_and_its_border() {
    let mut field = MineField::with_mines(10, 10, [pos(0, 0)]).unwrap();
    field.open(pos(5, 5));

    // Every safe cell is reachable from the zero region.
    assert_eq!(field.opened_count(), 99);
    assert!(!field.is_opened(pos(0, 0)));
    assert_eq!(field.symbol(pos(1, 1)), Symbol::Count(1));
    assert_eq!(field.symbol(pos(9, 9)), Symbol::Count(0));
    assert!(field.is_won());
}

#[test]
fn test_flood_fill_stops_at_numbers() {
    // A wall of mines in column 2 splits the board.
    let wall: Vec<_> = (0..5).map(|r| pos(r, 2)).collect();
    let mut field = MineField::with_mines(5, 5, wall).unwrap();
    field.open(pos(2, 0));

    for row in 0..5 {
        assert!(field.is_opened(pos(row, 0)));
        assert!(field.is_opened(pos(row, 1)));
        assert!(!field.is_opened(pos(row, 3)));
        assert!(!field.is_opened(pos(row, 4)));
    }
    assert!(!field.is_lost());
}

#[test]
fn test_opening_numbered_cell_does_not_cascade() {
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();
    field.open(pos(1, 1));
    assert_eq!(field.opened_count(), 1);
    assert_eq!(field.symbol(pos(1, 1)), Symbol::Count(1));
}

#[test]
fn test_opening_a_mine_loses() {
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();
    field.open(pos(0, 0));
    assert!(field.is_lost());
    assert!(!field.is_won());
    assert_eq!(field.outcome(), Some(Outcome::Lost));
    assert_eq!(field.symbol(pos(0, 0)), Symbol::Mine);
}

#[test]
fn test_chord_with_matching_flags_opens_neighbors() {
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();
    field.open(pos(1, 1));
    field.toggle_flag(pos(0, 0));
    field.clear(pos(1, 1));

    assert_eq!(field.opened_count(), 8);
    assert!(field.highlighted().next().is_none());
    assert_eq!(field.outcome(), Some(Outcome::Won));
}

#[test]
fn test_chord_with_missing_flags_highlights() {
    let mut field = MineField::with_mines(3, 3, [pos(0, 0), pos(2, 2)]).unwrap();
    field.open(pos(1, 1));
    field.toggle_flag(pos(0, 0));
    field.clear(pos(1, 1));

    assert_eq!(field.opened_count(), 1);
    let hinted: Vec<_> = field.highlighted().collect();
    assert_eq!(hinted.len(), 7);
    assert!(!hinted.contains(&pos(0, 0)));
    assert!(hinted.contains(&pos(2, 2)));
}

#[test]
fn test_chord_with_wrong_flag_explodes() {
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();
    field.open(pos(1, 1));
    field.toggle_flag(pos(2, 2));
    field.clear(pos(1, 1));
    assert!(field.is_lost());
}

#[test]
fn test_chord_on_closed_or_zero_cell_is_noop() {
    let mut field = MineField::with_mines(4, 4, [pos(0, 0)]).unwrap();
    field.clear(pos(3, 3));
    assert_eq!(field.opened_count(), 0);

    field.open(pos(3, 3));
    let opened = field.opened_count();
    field.clear(pos(3, 3));
    assert_eq!(field.opened_count(), opened);
    assert!(field.highlighted().next().is_none());
}

#[test]
fn test_flags_toggle_and_protect() {
    let t0 = Instant::now();
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();

    field.toggle_flag(pos(0, 0));
    assert_eq!(field.symbol(pos(0, 0)), Symbol::Flag);
    field.reveal_or_clear(pos(0, 0), t0);
    assert!(!field.is_lost());
    assert_eq!(field.started(), Some(t0));

    field.toggle_flag(pos(0, 0));
    assert_eq!(field.symbol(pos(0, 0)), Symbol::Closed);
    assert_eq!(field.flagged_count(), 0);
}

#[test]
fn test_opened_cells_cannot_be_flagged() {
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();
    field.open(pos(1, 1));
    field.toggle_flag(pos(1, 1));
    assert!(!field.is_flagged(pos(1, 1)));
}

#[test]
fn test_cascade_removes_flags() {
    let mut field = MineField::with_mines(5, 5, [pos(0, 0)]).unwrap();
    field.toggle_flag(pos(4, 4));
    field.open(pos(2, 2));
    assert!(field.is_opened(pos(4, 4)));
    assert!(!field.is_flagged(pos(4, 4)));
}

#[test]
fn test_cursor_clamps_on_each_axis() {
    let mut field = MineField::with_mines(4, 2, []).unwrap();
    assert_eq!(field.cursor(), pos(1, 2));

    for _ in 0..5 {
        field.step(Direction::Right);
    }
    assert_eq!(field.cursor(), pos(1, 3));
    for _ in 0..5 {
        field.step(Direction::Down);
    }
    assert_eq!(field.cursor(), pos(1, 3));
    for _ in 0..5 {
        field.step(Direction::Up);
        field.step(Direction::Left);
    }
    assert_eq!(field.cursor(), pos(0, 0));
}

#[test]
#[should_panic(expected = "one cell")]
fn test_diagonal_move_panics() {
    let mut field = MineField::standard(1);
    field.move_cursor(1, 1);
}

#[test]
fn test_clock_lifecycle() {
    let t0 = Instant::now();
    let mut field = MineField::with_mines(3, 3, [pos(0, 0)]).unwrap();
    assert_eq!(field.elapsed(t0 + Duration::from_secs(9)), Duration::ZERO);

    field.reveal_or_clear(pos(2, 2), t0);
    assert_eq!(field.elapsed(t0 + Duration::from_secs(4)), Duration::from_secs(4));

    field.add_pause(Duration::from_secs(1));
    assert_eq!(field.elapsed(t0 + Duration::from_secs(4)), Duration::from_secs(3));

    // (2,2) cascades to every safe cell.
    assert!(field.is_won());
    assert!(field.commit_end(t0 + Duration::from_secs(6)));
    assert!(!field.commit_end(t0 + Duration::from_secs(8)));
    assert_eq!(field.elapsed(t0 + Duration::from_secs(60)), Duration::from_secs(5));

    // Pauses after the end are ignored.
    field.add_pause(Duration::from_secs(2));
    assert_eq!(field.stoppage(), Duration::from_secs(1));
}

#[test]
fn test_commit_end_requires_outcome() {
    let mut field = MineField::standard(5);
    assert!(!field.commit_end(Instant::now()));
    assert!(!field.is_ended());
}
