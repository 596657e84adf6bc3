use super::*;
use chess_core::{legal_moves, Coord, PieceKind};

fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid fen")
}

fn find(moves: &[Move], from: &str, to: &str) -> Move {
    let from = Coord::from_algebraic(from).unwrap();
    let to = Coord::from_algebraic(to).unwrap();
    *moves
        .iter()
        .find(|mv| mv.from == from && mv.to == to)
        .expect("move is generated")
}

#[test]
fn test_undefended_queen_capture_scores_mvv_lva_plus_bonus() {
    let b = board("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let moves = legal_moves(&b);
    let pxq = find(&moves, "e4", "d5");
    assert_eq!(score_move(&b, &pxq), 900 * 10 - 100 + 500);
}

#[test]
fn test_most_valuable_victim_is_searched_first() {
    // The e4 pawn can take the queen on d5 or the knight on f5.
    let b = board("4k3/8/8/3q1n2/4P3/8/8/4K3 w - - 0 1");
    let mut moves = legal_moves(&b);
    order_moves(&b, &mut moves);
    assert_eq!(moves[0].to, Coord::from_algebraic("d5").unwrap());
    assert_eq!(moves[1].to, Coord::from_algebraic("f5").unwrap());
}

#[test]
fn test_defended_victim_gets_no_bonus() {
    // The d5 queen is guarded by the e6 pawn.
    let b = board("4k3/8/4p3/3q4/4P3/8/8/4K3 w - - 0 1");
    let moves = legal_moves(&b);
    let pxq = find(&moves, "e4", "d5");
    assert_eq!(score_move(&b, &pxq), 900 * 10 - 100 - 50);
}

#[test]
fn test_castling_gets_flat_bonus() {
    let b = board("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&b);
    let castle = moves.iter().find(|mv| mv.is_castle).expect("castling generated");
    assert_eq!(score_move(&b, castle), 300);
}

#[test]
fn test_promotions_ordered_by_piece_value() {
    let b = board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let mut moves = legal_moves(&b);
    order_moves(&b, &mut moves);
    let promotions: Vec<PieceKind> = moves.iter().filter_map(|mv| mv.promotion).collect();
    assert_eq!(
        promotions,
        vec![
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight
        ]
    );
    assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
}

#[test]
fn test_landing_on_attacked_square_is_penalised() {
    // Nc3-d5 walks into the e6 pawn; Nc3-b5 is safe.
    let b = board("4k3/8/4p3/8/8/2N5/8/4K3 w - - 0 1");
    let moves = legal_moves(&b);
    assert_eq!(score_move(&b, &find(&moves, "c3", "d5")), -160);
    assert_eq!(score_move(&b, &find(&moves, "c3", "b5")), 0);
}

#[test]
fn test_equal_scores_keep_generation_order() {
    let b = Board::new();
    let generated = legal_moves(&b);
    let mut ordered = generated.clone();
    order_moves(&b, &mut ordered);
    assert_eq!(ordered, generated);
}
