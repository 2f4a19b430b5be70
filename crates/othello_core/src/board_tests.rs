use super::*;

#[test]
fn test_initial_layout() {
    let b = Board::initial();
    assert_eq!(b.count(Cell::White), 2);
    assert_eq!(b.count(Cell::Black), 2);
    assert_eq!(b.count(Cell::Empty), CELL_COUNT - 4);

    assert_eq!(b.get(Position::new(3, 3)), Ok(Cell::White));
    assert_eq!(b.get(Position::new(4, 4)), Ok(Cell::White));
    assert_eq!(b.get(Position::new(4, 3)), Ok(Cell::Black));
    assert_eq!(b.get(Position::new(3, 4)), Ok(Cell::Black));
}

#[test]
fn test_get_out_of_bounds() {
    let b = Board::initial();
    assert_eq!(
        b.get(Position::new(9, 0)),
        Err(GameError::OutOfBounds { col: 9, row: 0 })
    );
    assert_eq!(
        b.get(Position::new(0, 7)),
        Err(GameError::OutOfBounds { col: 0, row: 7 })
    );
    assert!(b.get(Position::new(-1, 3)).is_err());
    assert!(b.get(Position::new(8, 6)).is_ok());
}

#[test]
fn test_get_is_idempotent() {
    let b = Board::initial();
    for pos in Position::all() {
        let first = b.get(pos).unwrap();
        assert_eq!(b.get(pos).unwrap(), first);
        assert_eq!(b.get(pos).unwrap(), first);
    }
}

#[test]
fn test_with_cell_leaves_receiver_unchanged() {
    let b = Board::initial();
    let pos = Position::new(0, 0);
    let next = b.with_cell(pos, Cell::Black).unwrap();

    assert_eq!(b.get(pos), Ok(Cell::Empty));
    assert_eq!(next.get(pos), Ok(Cell::Black));
    assert_eq!(next.count(Cell::Black), 3);
    assert!(b.with_cell(Position::new(9, 9), Cell::White).is_err());
}

#[test]
fn test_corners_are_on_nine_by_seven_grid() {
    let b = Board::empty()
        .with_cell(Position::new(8, 6), Cell::White)
        .unwrap()
        .with_cell(Position::new(0, 6), Cell::Black)
        .unwrap()
        // (7, 7) would be a corner on an 8x8 board, here it is off the grid
        .with_cell(Position::new(6, 6), Cell::White)
        .unwrap();
    assert_eq!(b.corners(Player::White), 1);
    assert_eq!(b.corners(Player::Black), 1);
}

#[test]
fn test_display_and_parse() {
    let b = Board::initial();
    let text = b.to_string();
    assert_eq!(text.lines().count(), ROWS);
    assert_eq!(text.lines().nth(3), Some("...WB...."));
    assert_eq!(text.parse::<Board>().unwrap(), b);

    assert!("W........".parse::<Board>().is_err());
}

#[test]
fn test_is_full() {
    assert!(!Board::initial().is_full());

    let full = Position::all().fold(Board::empty(), |b, p| {
        let cell = if p.col < 5 { Cell::White } else { Cell::Black };
        b.with_cell(p, cell).unwrap()
    });
    assert!(full.is_full());
    assert_eq!(full.count(Cell::White), 5 * ROWS);
    assert!(crate::rules::is_terminal(&full));
}
