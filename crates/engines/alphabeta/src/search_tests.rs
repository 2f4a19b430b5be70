use std::cell::RefCell;

use super::*;
use crate::eval::{Heuristic, WIN_SCORE};
use othello_core::apply_move;

/// Scores every node the same.
struct Constant(i32);

impl Evaluator for Constant {
    fn evaluate(&self, _node: &SearchNode, _for_player: Player) -> i32 {
        self.0
    }
}

/// Scores 1 when the searching player holds `square`, -1 when the opponent
/// does, and keeps every board it was asked about.
struct Holds {
    square: Position,
    seen: RefCell<Vec<Board>>,
}

impl Holds {
    fn new(square: Position) -> Self {
        Self {
            square,
            seen: RefCell::new(Vec::new()),
        }
    }

    fn saw(&self, board: &Board) -> bool {
        self.seen.borrow().contains(board)
    }
}

impl Evaluator for Holds {
    fn evaluate(&self, node: &SearchNode, for_player: Player) -> i32 {
        self.seen.borrow_mut().push(*node.board());
        match node.board().cell(self.square) {
            Some(c) if c == for_player.cell() => 1,
            Some(c) if c == for_player.opponent().cell() => -1,
            _ => 0,
        }
    }
}

/// Plays `moves` from the opening, alternating from White.
fn opening_line(moves: &[(i8, i8)]) -> Board {
    let mut board = Board::initial();
    let mut player = Player::White;
    for &(col, row) in moves {
        board = apply_move(&board, Position::new(col, row), player).unwrap();
        player = player.opponent();
    }
    board
}

/// Exhaustive minimax without pruning, first-encountered move wins ties.
fn minimax<E: Evaluator>(
    node: &SearchNode,
    depth: u8,
    for_player: Player,
    eval: &E,
) -> (i32, Option<Position>) {
    if depth == 0 || node.is_terminal() || node.moves().is_empty() {
        return (eval.evaluate(node, for_player), None);
    }
    let maximizing = node.to_move() == for_player;
    let mut best: Option<(i32, Position)> = None;
    for &pos in node.moves() {
        let child = node.child(pos).unwrap();
        let (value, _) = minimax(&child, depth - 1, for_player, eval);
        let better = match best {
            None => true,
            Some((b, _)) if maximizing => value > b,
            Some((b, _)) => value < b,
        };
        if better {
            best = Some((value, pos));
        }
    }
    best.map(|(v, p)| (v, Some(p))).unwrap()
}

/// Positions along a deterministic game from the opening.
fn sample_positions() -> Vec<(Board, Player)> {
    let mut game = othello_core::GameEngine::new();
    let mut out = Vec::new();
    let mut ply = 0usize;
    while let Some(player) = game.active_player() {
        if ply % 3 == 0 {
            out.push((*game.board(), player));
        }
        let moves = game.legal_moves();
        let pos = moves[(ply * 7) % moves.len()];
        game.play_move(pos).unwrap();
        ply += 1;
    }
    out
}

#[test]
fn test_depth_zero_evaluates_root_only() {
    let board = Board::initial();
    let outcome = best_move(&board, 0, Player::White, &Heuristic);
    let root = SearchNode::root(board, Player::White);

    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, Heuristic.evaluate(&root, Player::White));
    assert_eq!(outcome.nodes, 1);
}

#[test]
fn test_constant_evaluator_picks_first_move() {
    let board = Board::initial();
    let outcome = best_move(&board, 2, Player::White, &Constant(7));
    assert_eq!(outcome.best_move, Some(Position::new(4, 2)));
    assert_eq!(outcome.score, 7);

    let outcome = best_move(&board, 2, Player::Black, &Constant(-3));
    assert_eq!(outcome.best_move, Some(Position::new(3, 2)));
}

#[test]
fn test_root_without_moves_passes() {
    let board: Board = "
        WB.......
        .........
        .........
        .........
        .........
        .........
        .........
    "
    .parse()
    .unwrap();
    let outcome = best_move(&board, 3, Player::Black, &Heuristic);
    assert_eq!(outcome.best_move, None);
}

#[test]
fn test_prefers_corner() {
    let board: Board = "
        .........
        .BW......
        .........
        .........
        .........
        .........
        ......WB.
    "
    .parse()
    .unwrap();
    let outcome = best_move(&board, 1, Player::White, &Heuristic);
    assert_eq!(outcome.best_move, Some(Position::new(8, 6)));
}

#[test]
fn test_finds_winning_move() {
    // (1,0) and (3,0) each capture one pawn; (3,1) captures both and ends
    // the game
    let board: Board = "
        .........
        WBB......
        .W.......
        .........
        .........
        .........
        .........
    "
    .parse()
    .unwrap();
    let outcome = best_move(&board, 1, Player::White, &Heuristic);
    assert_eq!(outcome.best_move, Some(Position::new(3, 1)));
    assert_eq!(outcome.score, WIN_SCORE);

    let scan_order = best_move(&board, 1, Player::White, &Constant(0));
    assert_eq!(scan_order.best_move, Some(Position::new(1, 0)));
}

#[test]
fn test_matches_plain_minimax() {
    for (board, player) in sample_positions() {
        for depth in 1..=3 {
            let root = SearchNode::root(board, player);
            let (value, mv) = minimax(&root, depth, player, &Heuristic);
            let outcome = best_move(&board, depth, player, &Heuristic);
            assert_eq!(outcome.score, value, "depth {depth} on\n{board}");
            assert_eq!(outcome.best_move, mv, "depth {depth} on\n{board}");
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let board = Board::initial();
    let outcome = best_move(&board, 4, Player::White, &Heuristic);
    let full = count_nodes(&SearchNode::root(board, Player::White), 4);
    assert!(outcome.nodes < full, "{} >= {}", outcome.nodes, full);
}

#[test]
fn test_minimizing_layer_cuts_after_refutation() {
    // (4,2) scores 1 under all three replies. Every other opening leaves
    // (4,2) empty, so the first reply already drops below 1 and the other
    // two replies are skipped.
    let eval = Holds::new(Position::new(4, 2));
    let outcome = best_move(&Board::initial(), 2, Player::White, &eval);

    assert_eq!(outcome.best_move, Some(Position::new(4, 2)));
    assert_eq!(outcome.score, 1);
    // root, 4 openings, 3 replies to the first, 1 to each of the others
    assert_eq!(outcome.nodes, 1 + 4 + 3 + 3);
    assert_eq!(eval.seen.borrow().len(), 6);

    assert!(eval.saw(&opening_line(&[(5, 3), (3, 2)])));
    assert!(!eval.saw(&opening_line(&[(5, 3), (5, 2)])));
    assert!(!eval.saw(&opening_line(&[(3, 5), (4, 5)])));

    let full = count_nodes(&SearchNode::root(Board::initial(), Player::White), 2);
    assert_eq!(full, 1 + 4 + 4 * 3);
}

#[test]
fn test_maximizing_layer_cuts_above_bound() {
    // After (4,2) (3,2) White can never reach (6,2), so that reply is worth
    // 0. After (4,2) (5,2) White's first move is (6,2), worth 1, which beats
    // the 0 Black already has: White's remaining moves there are skipped.
    let eval = Holds::new(Position::new(6, 2));
    best_move(&Board::initial(), 3, Player::White, &eval);

    assert!(eval.saw(&opening_line(&[(4, 2), (5, 2), (6, 2)])));
    assert!(!eval.saw(&opening_line(&[(4, 2), (5, 2), (2, 4)])));
    assert!(!eval.saw(&opening_line(&[(4, 2), (5, 2), (3, 5)])));
}

#[test]
fn test_opponent_pass_stays_on_maximizing_layer() {
    // Either White move leaves Black without a reply and White finishes the
    // game with the other one. Only a search that lets White move again
    // sees the win at depth 2.
    let board: Board = "
        WB.......
        .........
        .......BW
        .........
        .........
        .........
        .........
    "
    .parse()
    .unwrap();
    let outcome = best_move(&board, 2, Player::White, &Heuristic);

    assert_eq!(outcome.best_move, Some(Position::new(2, 0)));
    assert_eq!(outcome.score, WIN_SCORE);
    // root, then one move and its finishing move on each branch
    assert_eq!(outcome.nodes, 5);
}

fn count_nodes(node: &SearchNode, depth: u8) -> u64 {
    if depth == 0 || node.is_terminal() {
        return 1;
    }
    1 + node
        .moves()
        .iter()
        .map(|&p| count_nodes(&node.child(p).unwrap(), depth - 1))
        .sum::<u64>()
}
