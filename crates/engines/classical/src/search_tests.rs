use super::*;
use chess_core::{legal_moves_into, Coord};
use crate::eval::evaluate;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid fen")
}

fn sq(s: &str) -> Coord {
    Coord::from_algebraic(s).unwrap()
}

/// Full-width minimax with the same leaf and terminal rules, no pruning.
fn plain_minimax(board: &mut Board, depth: u8, nodes: &mut u64) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }
    let maximizing = board.side_to_move == Color::White;
    let mut moves = Vec::new();
    legal_moves_into(board, &mut moves);
    if moves.is_empty() {
        if !board.in_check(board.side_to_move) {
            return 0;
        }
        let mate = MATE_SCORE + depth as i32;
        return if maximizing { -mate } else { mate };
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let undo = board.apply_move(&mv);
        *nodes += 1;
        let score = plain_minimax(board, depth - 1, nodes);
        board.undo_move(&mv, undo);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

#[test]
fn test_pick_best_move_start_position() {
    let mut ctx = SearchContext::default();
    let result = pick_best_move(&Board::new(), 3, &mut ctx);
    assert!(result.is_some());
    assert!(ctx.nodes > 0);
}

#[test]
fn test_pick_best_move_finds_mate_in_one() {
    // Qe8 is mate: the king is boxed in by its own pawns.
    let b = board("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let mut ctx = SearchContext::default();
    let (mv, score) = pick_best_move(&b, 2, &mut ctx).expect("white has moves");
    assert_eq!((mv.from, mv.to), (sq("e1"), sq("e8")));
    assert!(score >= MATE_SCORE);
}

#[test]
fn test_black_finds_mate_in_one_as_minimiser() {
    let b = board("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1");
    let mut ctx = SearchContext::default();
    let (mv, score) = pick_best_move(&b, 2, &mut ctx).expect("black has moves");
    assert_eq!((mv.from, mv.to), (sq("e8"), sq("e1")));
    assert!(score <= -MATE_SCORE);
}

#[test]
fn test_no_moves_at_root_returns_none() {
    let stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let mut ctx = SearchContext::default();
    assert!(pick_best_move(&stalemate, 3, &mut ctx).is_none());
}

#[test]
fn test_stalemate_scores_zero() {
    let mut b = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let mut ctx = SearchContext::default();
    assert_eq!(minimax(&mut b, 2, -INFINITY, INFINITY, false, &mut ctx), 0);
}

#[test]
fn test_checkmate_scores_by_role_and_depth() {
    // Back-rank mates, each side on the receiving end.
    let mut white_mated = board("6k1/8/8/8/8/8/5PPP/4r1K1 w - - 0 1");
    let mut black_mated = board("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let mut ctx = SearchContext::default();
    assert_eq!(
        minimax(&mut white_mated, 3, -INFINITY, INFINITY, true, &mut ctx),
        -(MATE_SCORE + 3)
    );
    assert_eq!(
        minimax(&mut black_mated, 1, -INFINITY, INFINITY, false, &mut ctx),
        MATE_SCORE + 1
    );
}

#[test]
fn test_depth_zero_returns_static_evaluation() {
    let mut b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let expected = evaluate(&mut b.clone());
    let mut ctx = SearchContext::default();
    assert_eq!(minimax(&mut b, 0, -INFINITY, INFINITY, true, &mut ctx), expected);
    assert_eq!(ctx.nodes, 0);
}

#[test]
fn test_alpha_beta_matches_full_width_search() {
    let cases = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 2),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
        ("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 2", 2),
    ];
    for (fen, depth) in cases {
        let b = board(fen);
        let maximizing = b.side_to_move == Color::White;

        let mut full_nodes = 0;
        let expected = plain_minimax(&mut b.clone(), depth, &mut full_nodes);

        let mut ctx = SearchContext::default();
        let pruned = minimax(&mut b.clone(), depth, -INFINITY, INFINITY, maximizing, &mut ctx);
        assert_eq!(pruned, expected, "{fen}");
        assert!(ctx.nodes <= full_nodes, "{fen}");

        let mut ctx = SearchContext::default();
        let (_, root_score) = pick_best_move(&b, depth, &mut ctx).expect("moves exist");
        assert_eq!(root_score, expected, "{fen}");
    }
}

#[test]
fn test_search_restores_the_board() {
    let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let mut work = b.clone();
    let mut ctx = SearchContext::default();
    minimax(&mut work, 2, -INFINITY, INFINITY, true, &mut ctx);
    assert_eq!(work, b);
}
