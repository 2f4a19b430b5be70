use super::*;

#[test]
fn test_opening_moves_for_white() {
    let b = Board::initial();
    let moves = legal_moves(&b, Player::White);
    // Row-major: (4,2) on row 2, (5,3) on row 3, (2,4) on row 4, (3,5) on row 5
    assert_eq!(
        moves,
        vec![
            Position::new(4, 2),
            Position::new(5, 3),
            Position::new(2, 4),
            Position::new(3, 5),
        ]
    );
}

#[test]
fn test_opening_moves_for_black() {
    let b = Board::initial();
    let moves = legal_moves(&b, Player::Black);
    assert_eq!(
        moves,
        vec![
            Position::new(3, 2),
            Position::new(2, 3),
            Position::new(5, 4),
            Position::new(4, 5),
        ]
    );
}

#[test]
fn test_occupied_square_is_never_legal() {
    let b = Board::initial();
    for pos in [Position::new(3, 3), Position::new(4, 3)] {
        assert!(!is_legal(&b, pos, Player::White));
        assert!(!is_legal(&b, pos, Player::Black));
    }
}

#[test]
fn test_off_board_square_is_not_legal() {
    let b = Board::initial();
    assert!(!is_legal(&b, Position::new(-1, 0), Player::White));
    assert!(!is_legal(&b, Position::new(9, 3), Player::White));
    assert!(capture_directions(&b, Position::new(0, 7), Player::White).is_empty());
}

#[test]
fn test_diagonal_without_anchor_is_rejected() {
    // (5,2) sees two black pawns on its south-west diagonal and then an empty
    // square, so it is not a capture.
    let b = Board::initial();
    assert!(!captures_in_direction(&b, Position::new(5, 2), Player::White, (-1, 1)));
    assert!(!is_legal(&b, Position::new(5, 2), Player::White));
}

#[test]
fn test_walk_off_edge_disqualifies_direction() {
    let b: Board = "
        .BBBBBBBB
        .........
        .........
        .........
        .........
        .........
        .........
    "
    .parse()
    .unwrap();
    // Eight black pawns reach the east edge with no white anchor
    assert!(!captures_in_direction(&b, Position::new(0, 0), Player::White, (1, 0)));
    assert!(!is_legal(&b, Position::new(0, 0), Player::White));
}

#[test]
fn test_zero_direction_is_excluded() {
    let b = Board::initial();
    assert!(!captures_in_direction(&b, Position::new(5, 3), Player::White, (0, 0)));
}

#[test]
fn test_capture_directions_multiple() {
    let b: Board = "
        .........
        .W.W.W...
        ..BBB....
        .WB.BW...
        ..BBB....
        .W.W.W...
        .........
    "
    .parse()
    .unwrap();
    let dirs = capture_directions(&b, Position::new(3, 3), Player::White);
    assert_eq!(dirs.len(), 8);
    assert!(is_legal(&b, Position::new(3, 3), Player::White));
    assert!(!is_legal(&b, Position::new(3, 3), Player::Black));
}

#[test]
fn test_no_moves_is_a_valid_state() {
    let b: Board = "
        WWWWWWWWW
        WWWWWWWWW
        WWWWWWWWW
        WWWWWWWWW
        WWWWWWWWW
        WWWWWWWWW
        WWWWWWWW.
    "
    .parse()
    .unwrap();
    assert!(legal_moves(&b, Player::Black).is_empty());
    assert!(legal_moves(&b, Player::White).is_empty());
    assert_eq!(mobility(&b, Player::White), 0);
    assert!(is_terminal(&b));
    assert!(!is_terminal(&Board::initial()));
}
