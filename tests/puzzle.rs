//! Board invariants checked through the public API

use picture_slider::{Move, Puzzle, PuzzleError, TileId};

fn assert_permutation(puzzle: &Puzzle) {
    let slots = puzzle.grid().slot_count();
    let mut seen = vec![false; slots];
    for slot in puzzle
        .tiles()
        .iter()
        .map(|tile| tile.current_position())
        .chain(std::iter::once(puzzle.blank_slot()))
    {
        assert!((1..=slots).contains(&slot), "slot {slot} off the board");
        assert!(!seen[slot - 1], "slot {slot} used twice");
        seen[slot - 1] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn solved_board_cannot_move_blank_down_or_right() {
    let mut puzzle = Puzzle::new(4).unwrap();
    let before = puzzle.clone();

    assert_eq!(puzzle.find_movable_tile(Move::Down), None);
    assert_eq!(puzzle.find_movable_tile(Move::Right), None);
    assert_eq!(puzzle.try_move(Move::Down), None);
    assert_eq!(puzzle.try_move(Move::Right), None);
    assert_eq!(puzzle, before);
}

#[test]
fn solved_detection_follows_one_move_and_its_inverse() {
    for direction in [Move::Up, Move::Left] {
        let mut puzzle = Puzzle::new(4).unwrap();
        assert!(puzzle.is_solved());

        let tile = puzzle.find_movable_tile(direction).unwrap();
        puzzle.apply_move(tile, direction);
        assert!(!puzzle.is_solved());

        let back = direction.opposite();
        let tile = puzzle.find_movable_tile(back).unwrap();
        puzzle.apply_move(tile, back);
        assert!(puzzle.is_solved());
    }
}

#[test]
fn every_move_is_undone_by_its_opposite() {
    let mut puzzle = Puzzle::new(4).unwrap();
    // Walk the blank to the middle so all four directions are open.
    for direction in [Move::Up, Move::Left, Move::Up, Move::Left] {
        puzzle.try_move(direction).unwrap();
    }
    assert_eq!(puzzle.blank_slot(), 6);

    for direction in Move::ALL {
        let before = puzzle.clone();
        assert!(puzzle.try_move(direction).is_some());
        assert_permutation(&puzzle);
        assert!(puzzle.try_move(direction.opposite()).is_some());
        assert_eq!(puzzle, before, "{direction} was not undone");
    }
}

#[test]
fn tile_on_right_edge_does_not_wrap_to_next_row() {
    let mut puzzle = Puzzle::new(4).unwrap();
    for direction in [Move::Up, Move::Up, Move::Left, Move::Left, Move::Left] {
        puzzle.try_move(direction).unwrap();
    }
    assert_eq!(puzzle.blank_slot(), 5);
    assert_eq!(puzzle.tile_at(4).map(|tile| tile.id()), Some(TileId(4)));

    assert_eq!(puzzle.find_movable_tile(Move::Left), None);
    assert!(!puzzle.grid().is_adjacent(4, 5, Move::Right));
}

#[test]
fn from_homes_accepts_shuffled_complete_sets() {
    let puzzle = Puzzle::from_homes(&[3, 1, 8, 2, 7, 4, 6, 5]).unwrap();
    assert_eq!(puzzle.side(), 3);
    assert_eq!(puzzle.blank_slot(), 9);
    assert!(puzzle.is_solved());
}

#[test]
fn from_homes_rejects_malformed_sets() {
    assert_eq!(
        Puzzle::from_homes(&[1, 2, 3, 4]),
        Err(PuzzleError::NotSquare { count: 4 })
    );
    assert_eq!(
        Puzzle::from_homes(&[]),
        Err(PuzzleError::NotSquare { count: 0 })
    );
    assert_eq!(
        Puzzle::from_homes(&[1, 2, 2]),
        Err(PuzzleError::DuplicateHome(2))
    );
    assert_eq!(
        Puzzle::from_homes(&[1, 4, 2]),
        Err(PuzzleError::HomeOutOfRange { home: 4, max: 3 })
    );
    assert_eq!(
        Puzzle::from_homes(&[0, 1, 2]),
        Err(PuzzleError::HomeOutOfRange { home: 0, max: 3 })
    );
}

#[test]
fn construction_errors_describe_the_problem() {
    let err = Puzzle::new(1).unwrap_err();
    assert_eq!(err.to_string(), "grid side must be at least 2, got 1");

    let err = Puzzle::from_homes(&[1, 1, 2]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "home position 1 is assigned to more than one tile"
    );
}
